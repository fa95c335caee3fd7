use chrono::NaiveDate;
use thiserror::Error;

/// Rejected league configuration. Raised before any game is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("a league must have at least 2 teams, got {teams}")]
    NotEnoughTeams { teams: usize },

    #[error(
        "a league with {teams} teams must have at least {required} games per team \
         so every team plays every other team at least once, got {games_per_team}"
    )]
    NotEnoughGames {
        teams: usize,
        games_per_team: u32,
        required: u32,
    },

    #[error("team {team_id} appears more than once in the schedule")]
    DuplicateTeam { team_id: u32 },

    #[error("a season starting on {start_date} runs past the last representable date")]
    StartDateOutOfRange { start_date: NaiveDate },
}

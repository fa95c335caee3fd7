pub mod club;
pub mod league;
pub mod shared;
pub mod utils;

pub use club::{
    Player, PlayerBuilder, PlayerPositionType, STAR_PLAYER_FACTOR, Team, TeamBuilder,
    TeamCollection,
};

pub use league::{
    ConfigurationError, Game, GameOutcome, GameScorer, League, LeagueSettings, LeagueTable,
    LeagueTableRow, ScheduleReport, ScheduledGame, Scheduler, SeasonResult, TeamScheduleEntry,
    simulate_season,
};

pub use shared::FullName;

use crate::league::ConfigurationError;
use serde::{Deserialize, Serialize};

pub const MIN_TEAMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub team_count: u32,
    pub games_per_team: u32,
}

impl LeagueSettings {
    pub fn new(team_count: u32, games_per_team: u32) -> Self {
        LeagueSettings {
            team_count,
            games_per_team,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_schedule(self.team_count as usize, self.games_per_team)
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            team_count: 8,
            games_per_team: 14,
        }
    }
}

/// Every team must be able to meet every other team at least once.
pub fn validate_schedule(teams: usize, games_per_team: u32) -> Result<(), ConfigurationError> {
    if teams < MIN_TEAMS {
        return Err(ConfigurationError::NotEnoughTeams { teams });
    }

    let required = (teams - 1) as u32;
    if games_per_team < required {
        return Err(ConfigurationError::NotEnoughGames {
            teams,
            games_per_team,
            required,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert_eq!(LeagueSettings::default().validate(), Ok(()));
    }

    #[test]
    fn single_team_is_rejected() {
        assert_eq!(
            LeagueSettings::new(1, 10).validate(),
            Err(ConfigurationError::NotEnoughTeams { teams: 1 })
        );
        assert_eq!(
            LeagueSettings::new(0, 0).validate(),
            Err(ConfigurationError::NotEnoughTeams { teams: 0 })
        );
    }

    #[test]
    fn games_must_cover_every_opponent() {
        assert_eq!(
            LeagueSettings::new(6, 4).validate(),
            Err(ConfigurationError::NotEnoughGames {
                teams: 6,
                games_per_team: 4,
                required: 5,
            })
        );
        assert_eq!(LeagueSettings::new(6, 5).validate(), Ok(()));
        assert_eq!(LeagueSettings::new(2, 1).validate(), Ok(()));
    }

    #[test]
    fn error_message_names_the_minimum() {
        let message = LeagueSettings::new(4, 1).validate().unwrap_err().to_string();
        assert!(message.contains("at least 3 games"));
    }
}

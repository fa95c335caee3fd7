//! Runtime configuration read from environment variables.

use color_eyre::eyre::{WrapErr, eyre};
use league_core::LeagueSettings;
use league_database::{DEFAULT_STAR_PROBABILITY, RosterSettings};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// League display name (`LEAGUE_NAME`).
    pub league_name: String,
    /// Teams to generate (`LEAGUE_TEAMS`).
    pub team_count: u32,
    /// Games-per-team quota (`LEAGUE_GAMES`).
    pub games_per_team: u32,
    /// Probability of a generated player being a star (`STAR_PROBABILITY`).
    pub star_probability: f64,
    /// Fixed seed for reproducible runs (`LEAGUE_SEED`), entropy when unset.
    pub seed: Option<u64>,
    /// Extra re-simulations after the first season (`RESIMULATIONS`).
    pub resimulations: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = LeagueSettings::default();

        AppConfig {
            league_name: "Simulated League".to_string(),
            team_count: settings.team_count,
            games_per_team: settings.games_per_team,
            star_probability: DEFAULT_STAR_PROBABILITY,
            seed: None,
            resimulations: 0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> color_eyre::Result<Self> {
        let defaults = AppConfig::default();

        let config = AppConfig {
            league_name: env::var("LEAGUE_NAME").unwrap_or(defaults.league_name),
            team_count: parse_var("LEAGUE_TEAMS")?.unwrap_or(defaults.team_count),
            games_per_team: parse_var("LEAGUE_GAMES")?.unwrap_or(defaults.games_per_team),
            star_probability: parse_var("STAR_PROBABILITY")?.unwrap_or(defaults.star_probability),
            seed: parse_var("LEAGUE_SEED")?,
            resimulations: parse_var("RESIMULATIONS")?.unwrap_or(defaults.resimulations),
        };

        if !(0.0..=1.0).contains(&config.star_probability) {
            return Err(eyre!(
                "STAR_PROBABILITY must be between 0 and 1, got {}",
                config.star_probability
            ));
        }

        Ok(config)
    }

    pub fn league_settings(&self) -> LeagueSettings {
        LeagueSettings::new(self.team_count, self.games_per_team)
    }

    pub fn roster_settings(&self) -> RosterSettings {
        RosterSettings::new(self.team_count).with_star_probability(self.star_probability)
    }
}

fn parse_var<T>(name: &str) -> color_eyre::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .wrap_err_with(|| format!("invalid value for {}: {:?}", name, value)),
        Err(_) => Ok(None),
    }
}

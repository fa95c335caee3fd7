use crate::generators::{PlayerGenerator, RosterError, TeamGenerator};
use crate::loaders::NamePools;
use league_core::Team;
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYERS_PER_TEAM: u32 = 5;
pub const DEFAULT_STAR_PROBABILITY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    pub team_count: u32,
    pub players_per_team: u32,
    pub star_probability: f64,
}

impl RosterSettings {
    pub fn new(team_count: u32) -> Self {
        RosterSettings {
            team_count,
            ..Default::default()
        }
    }

    pub fn with_star_probability(mut self, star_probability: f64) -> Self {
        self.star_probability = star_probability;
        self
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        RosterSettings {
            team_count: 8,
            players_per_team: DEFAULT_PLAYERS_PER_TEAM,
            star_probability: DEFAULT_STAR_PROBABILITY,
        }
    }
}

/// Why fewer teams than requested were created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterCap {
    TeamNames { available: u32 },
    PlayerNames { available: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResult {
    pub teams: Vec<Team>,
    pub requested_teams: u32,
    pub created_teams: u32,
    pub cap: Option<RosterCap>,
}

impl RosterResult {
    pub fn is_capped(&self) -> bool {
        self.cap.is_some()
    }
}

pub struct RosterGenerator;

impl RosterGenerator {
    /// Creates up to `settings.team_count` teams with full rosters.
    ///
    /// The count is capped, not rejected, when the pools run short: by the
    /// number of distinct team names, and by how many teams the first and
    /// last name pools can staff without repeating a full name.
    pub fn generate<R: Rng + ?Sized>(
        settings: &RosterSettings,
        pools: &NamePools,
        rng: &mut R,
    ) -> Result<RosterResult, RosterError> {
        if settings.team_count == 0 {
            return Ok(RosterResult {
                teams: Vec::new(),
                requested_teams: 0,
                created_teams: 0,
                cap: None,
            });
        }

        Self::ensure_pool(&pools.cities, "city")?;
        Self::ensure_pool(&pools.first_names, "first name")?;
        Self::ensure_pool(&pools.last_names, "last name")?;

        let mut team_generator = TeamGenerator::new(&pools.team_names, &pools.cities, rng);
        let mut player_generator = PlayerGenerator::with_people_names(
            &pools.first_names,
            &pools.last_names,
            settings.star_probability,
        );

        let (team_count, cap) = Self::team_count(settings, &team_generator, &player_generator);

        if let Some(cap) = cap {
            warn!(
                "requested {} teams, creating {} ({:?})",
                settings.team_count, team_count, cap
            );
        }

        let teams = (0..team_count)
            .map(|_| team_generator.generate(settings.players_per_team, &mut player_generator, &mut *rng))
            .collect::<Result<Vec<Team>, _>>()?;

        info!(
            "roster generated: {} teams, {} players, {} stars",
            teams.len(),
            teams.iter().map(|t| t.players.len()).sum::<usize>(),
            teams.iter().map(|t| t.star_count()).sum::<u32>()
        );

        Ok(RosterResult {
            requested_teams: settings.team_count,
            created_teams: teams.len() as u32,
            teams,
            cap,
        })
    }

    fn team_count(
        settings: &RosterSettings,
        team_generator: &TeamGenerator,
        player_generator: &PlayerGenerator,
    ) -> (u32, Option<RosterCap>) {
        let mut count = settings.team_count;
        let mut cap = None;

        let by_team_names = team_generator.remaining_names() as u32;
        if by_team_names < count {
            count = by_team_names;
            cap = Some(RosterCap::TeamNames {
                available: by_team_names,
            });
        }

        if settings.players_per_team > 0 {
            let by_player_names = (player_generator.remaining_names() / settings.players_per_team as usize) as u32;
            if by_player_names < count {
                count = by_player_names;
                cap = Some(RosterCap::PlayerNames {
                    available: by_player_names,
                });
            }
        }

        (count, cap)
    }

    fn ensure_pool(pool: &[String], name: &'static str) -> Result<(), RosterError> {
        if pool.is_empty() {
            return Err(RosterError::EmptyNamePool(name));
        }

        Ok(())
    }
}

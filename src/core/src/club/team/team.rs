use crate::club::team::builder::TeamBuilder;
use crate::Player;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Strength bonus granted per star player on the roster.
pub const STAR_PLAYER_FACTOR: f64 = 1.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub city: String,

    pub wins: u32,
    pub losses: u32,
    /// 1-based standings position, 0 until a season has been simulated
    pub rank: u32,
    /// Cached `round(star_count * 1.02 * 100)`
    pub star_multiplier: u32,

    pub players: Vec<Player>,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn roster(&self) -> &[Player] {
        &self.players
    }

    pub fn star_count(&self) -> u32 {
        self.players.iter().filter(|p| p.is_star).count() as u32
    }

    pub fn star_multiplier_for(star_count: u32) -> u32 {
        (star_count as f64 * STAR_PLAYER_FACTOR * 100.0).round() as u32
    }

    /// Recomputes the cached star multiplier from the current roster and
    /// returns the star count, which is the scoring bonus of this team.
    pub fn refresh_star_multiplier(&mut self) -> u32 {
        let star_count = self.star_count();
        self.star_multiplier = Self::star_multiplier_for(star_count);
        star_count
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn reset_record(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.rank = 0;
    }

    pub fn add_player(&mut self, mut player: Player) {
        player.team_id = self.id;
        self.players.push(player);
        self.refresh_star_multiplier();
    }

    pub fn remove_player(&mut self, player_id: u32) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == player_id)?;
        let player = self.players.remove(idx);
        self.refresh_star_multiplier();
        Some(player)
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.city, self.name)
    }
}

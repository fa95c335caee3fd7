use crate::utils::{FloatUtils, IntegerUtils};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Base scoring range of a team without star players.
pub const MIN_POINTS: u32 = 70;
pub const MAX_POINTS: u32 = 140;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDate,
    pub home_points: u32,
    pub away_points: u32,
    pub winner_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner_id: u32,
    pub loser_id: u32,
}

impl Game {
    pub fn new(id: u32, home_team_id: u32, away_team_id: u32, date: NaiveDate) -> Self {
        Game {
            id,
            home_team_id,
            away_team_id,
            date,
            home_points: 0,
            away_points: 0,
            winner_id: None,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn is_scored(&self) -> bool {
        self.winner_id.is_some()
    }

    pub fn loser_id(&self) -> Option<u32> {
        self.winner_id.map(|winner| {
            if winner == self.home_team_id {
                self.away_team_id
            } else {
                self.home_team_id
            }
        })
    }

    pub fn points_for(&self, team_id: u32) -> Option<u32> {
        if team_id == self.home_team_id {
            Some(self.home_points)
        } else if team_id == self.away_team_id {
            Some(self.away_points)
        } else {
            None
        }
    }
}

pub struct GameScorer;

impl GameScorer {
    /// Inclusive scoring range for a team with `star_bonus` star players.
    pub fn points_range(star_bonus: u32) -> (u32, u32) {
        (MIN_POINTS + star_bonus, MAX_POINTS + star_bonus)
    }

    /// Scores a game.
    ///
    /// Points are only drawn while both sides are still at zero, so a game
    /// that already carries a score keeps it. A drawn result is broken by
    /// giving one point to a side picked by coin flip. The winner is only
    /// assigned when none is recorded; the returned outcome is `Some` exactly
    /// when this call recorded it, so the caller updates win/loss counters
    /// once per game.
    pub fn score<R: Rng + ?Sized>(
        game: &mut Game,
        home_star_bonus: u32,
        away_star_bonus: u32,
        rng: &mut R,
    ) -> Option<GameOutcome> {
        if game.home_points == 0 && game.away_points == 0 {
            game.home_points = Self::draw_points(home_star_bonus, rng);
            game.away_points = Self::draw_points(away_star_bonus, rng);
        }

        if game.home_points == game.away_points {
            if FloatUtils::coin_flip(rng) {
                game.home_points += 1;
            } else {
                game.away_points += 1;
            }
        }

        if game.winner_id.is_some() {
            return None;
        }

        let outcome = if game.home_points > game.away_points {
            GameOutcome {
                winner_id: game.home_team_id,
                loser_id: game.away_team_id,
            }
        } else {
            GameOutcome {
                winner_id: game.away_team_id,
                loser_id: game.home_team_id,
            }
        };

        game.winner_id = Some(outcome.winner_id);

        Some(outcome)
    }

    fn draw_points<R: Rng + ?Sized>(star_bonus: u32, rng: &mut R) -> u32 {
        let (min, max) = Self::points_range(star_bonus);
        IntegerUtils::random(rng, min as i32, max as i32) as u32
    }
}

use crate::league::{ConfigurationError, validate_schedule};
use crate::utils::IntegerUtils;
use chrono::{NaiveDate, TimeDelta};
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Minimum and maximum rest between two games of the same team, in days.
pub const MIN_GAME_GAP_DAYS: i32 = 2;
pub const MAX_GAME_GAP_DAYS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledGame {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDate,
}

/// Round-based season scheduler.
///
/// Each round walks the pairs `(i, j)` with `i < j` in the order the teams
/// were given and books a game whenever both teams are still under the
/// games-per-team quota. Pairs are never shuffled, so teams early in the list
/// fill their quota first. When the quota arithmetic is tight a round can
/// saturate before every team reaches the quota; the shortfall is kept and
/// reported through [`Scheduler::shortfall`] instead of being forced away.
#[derive(Debug, Clone)]
pub struct Scheduler {
    team_ids: Vec<u32>,
    games_per_team: u32,
    games_played: Vec<u32>,
    next_date: Vec<NaiveDate>,
    remaining_rounds: u32,
}

impl Scheduler {
    pub fn new(
        team_ids: Vec<u32>,
        games_per_team: u32,
        start_date: NaiveDate,
    ) -> Result<Self, ConfigurationError> {
        validate_schedule(team_ids.len(), games_per_team)?;

        let mut seen = HashSet::with_capacity(team_ids.len());
        if let Some(&team_id) = team_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(ConfigurationError::DuplicateTeam { team_id });
        }

        let teams_count = team_ids.len();

        Self::season_end_bound(teams_count, games_per_team, start_date)
            .ok_or(ConfigurationError::StartDateOutOfRange { start_date })?;

        Ok(Scheduler {
            team_ids,
            games_per_team,
            games_played: vec![0; teams_count],
            next_date: vec![start_date; teams_count],
            remaining_rounds: games_per_team,
        })
    }

    pub fn team_ids(&self) -> &[u32] {
        &self.team_ids
    }

    pub fn games_per_team(&self) -> u32 {
        self.games_per_team
    }

    pub fn remaining_rounds(&self) -> u32 {
        self.remaining_rounds
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_rounds == 0
    }

    pub fn games_played(&self, team_id: u32) -> Option<u32> {
        self.index_of(team_id).map(|idx| self.games_played[idx])
    }

    pub fn next_available_date(&self, team_id: u32) -> Option<NaiveDate> {
        self.index_of(team_id).map(|idx| self.next_date[idx])
    }

    /// Games a team is still missing to reach the quota.
    pub fn shortfall(&self, team_id: u32) -> Option<u32> {
        self.games_played(team_id)
            .map(|played| self.games_per_team - played)
    }

    pub fn is_complete(&self) -> bool {
        self.games_played.iter().all(|&played| played == self.games_per_team)
    }

    /// Runs one pass over all pairs and returns the games booked in it.
    /// Returns an empty list once every round has been consumed.
    pub fn schedule_next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<ScheduledGame> {
        if self.is_finished() {
            return Vec::new();
        }

        let round = self.games_per_team - self.remaining_rounds + 1;
        let teams_count = self.team_ids.len();

        let mut games = Vec::new();

        for home in 0..teams_count {
            for away in (home + 1)..teams_count {
                if self.can_schedule(home, away) {
                    games.push(self.schedule_game(home, away, rng));
                }
            }
        }

        self.remaining_rounds -= 1;

        debug!("schedule round {}: {} games booked", round, games.len());

        games
    }

    /// Consumes all remaining rounds.
    pub fn schedule_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<ScheduledGame> {
        let mut games = Vec::new();

        while !self.is_finished() {
            games.extend(self.schedule_next_round(rng));
        }

        games
    }

    /// Latest date any game can land on. Every booked game pushes the latest
    /// next-available date forward by at most the maximum gap, and a season
    /// has at most `teams * games_per_team / 2` games.
    fn season_end_bound(
        teams_count: usize,
        games_per_team: u32,
        start_date: NaiveDate,
    ) -> Option<NaiveDate> {
        let max_games = (teams_count as u64).checked_mul(games_per_team as u64)? / 2;
        let days = max_games.checked_mul(MAX_GAME_GAP_DAYS as u64)?;

        start_date.checked_add_signed(TimeDelta::try_days(i64::try_from(days).ok()?)?)
    }

    fn can_schedule(&self, home: usize, away: usize) -> bool {
        home != away
            && self.games_played[home] < self.games_per_team
            && self.games_played[away] < self.games_per_team
    }

    fn schedule_game<R: Rng + ?Sized>(&mut self, home: usize, away: usize, rng: &mut R) -> ScheduledGame {
        let date = self.next_date[home].max(self.next_date[away]);

        let gap = IntegerUtils::random(rng, MIN_GAME_GAP_DAYS, MAX_GAME_GAP_DAYS);
        // bounded by season_end_bound, checked in new()
        let next_date = date
            .checked_add_signed(TimeDelta::days(gap as i64))
            .unwrap_or(NaiveDate::MAX);

        self.next_date[home] = next_date;
        self.next_date[away] = next_date;

        self.games_played[home] += 1;
        self.games_played[away] += 1;

        ScheduledGame {
            home_team_id: self.team_ids[home],
            away_team_id: self.team_ids[away],
            date,
        }
    }

    fn index_of(&self, team_id: u32) -> Option<usize> {
        self.team_ids.iter().position(|&id| id == team_id)
    }
}

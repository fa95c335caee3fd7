use crate::league::{Game, LeagueTable};
use crate::Team;
use serde::{Deserialize, Serialize};

/// Complete output of one season simulation. Callers swap it in as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonResult {
    pub games: Vec<Game>,
    pub teams: Vec<Team>,
    pub table: LeagueTable,
    pub report: ScheduleReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub games_per_team: u32,
    pub total_games: usize,
    pub rounds: Vec<usize>,
    pub teams: Vec<TeamScheduleEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScheduleEntry {
    pub team_id: u32,
    pub games_played: u32,
    pub shortfall: u32,
}

impl ScheduleReport {
    /// True when every team reached the games-per-team quota.
    pub fn is_complete(&self) -> bool {
        self.teams.iter().all(|t| t.shortfall == 0)
    }

    pub fn under_scheduled(&self) -> Vec<&TeamScheduleEntry> {
        self.teams.iter().filter(|t| t.shortfall > 0).collect()
    }

    pub fn games_played(&self, team_id: u32) -> Option<u32> {
        self.teams
            .iter()
            .find(|t| t.team_id == team_id)
            .map(|t| t.games_played)
    }
}

use crate::Team;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn by_id(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Case-insensitive match on the team name.
    pub fn name_contains(&self, fragment: &str) -> Vec<&Team> {
        let needle = fragment.to_lowercase();

        self.teams
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .collect()
    }
}

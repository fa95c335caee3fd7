use crate::club::player::builder::PlayerBuilder;
use crate::club::player::position::PlayerPositionType;
use crate::shared::fullname::FullName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub team_id: u32,
    pub full_name: FullName,
    pub position: PlayerPositionType,
    pub is_star: bool,
    pub birth_date: NaiveDate,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} - {}", self.full_name, self.position)
    }
}

use crate::club::player::player::Player;
use crate::club::player::position::PlayerPositionType;
use crate::shared::fullname::FullName;
use chrono::NaiveDate;

#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    team_id: Option<u32>,
    full_name: Option<FullName>,
    position: Option<PlayerPositionType>,
    is_star: Option<bool>,
    birth_date: Option<NaiveDate>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn team_id(mut self, team_id: u32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_star(mut self, is_star: bool) -> Self {
        self.is_star = Some(is_star);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            team_id: self.team_id.ok_or("team_id is required")?,
            full_name: self.full_name.ok_or("full_name is required")?,
            position: self.position.ok_or("position is required")?,
            is_star: self.is_star.unwrap_or(false),
            birth_date: self.birth_date.ok_or("birth_date is required")?,
        })
    }
}

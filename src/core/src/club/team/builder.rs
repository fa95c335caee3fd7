use crate::{Player, Team};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    city: Option<String>,
    wins: Option<u32>,
    losses: Option<u32>,
    players: Option<Vec<Player>>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn city(mut self, city: String) -> Self {
        self.city = Some(city);
        self
    }

    pub fn wins(mut self, wins: u32) -> Self {
        self.wins = Some(wins);
        self
    }

    pub fn losses(mut self, losses: u32) -> Self {
        self.losses = Some(losses);
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let id = self.id.ok_or("id is required")?;

        let mut players = self.players.unwrap_or_default();
        for player in &mut players {
            player.team_id = id;
        }

        let mut team = Team {
            id,
            name: self.name.ok_or("name is required")?,
            city: self.city.ok_or("city is required")?,
            wins: self.wins.unwrap_or(0),
            losses: self.losses.unwrap_or(0),
            rank: 0,
            star_multiplier: 0,
            players,
        };

        team.refresh_star_multiplier();

        Ok(team)
    }
}

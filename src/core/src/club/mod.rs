pub mod player;
pub mod team;

pub use player::{Player, PlayerBuilder, PlayerPositionType};
pub use team::{STAR_PLAYER_FACTOR, Team, TeamBuilder, TeamCollection};

pub mod error;
pub mod generator;
pub mod player;
pub mod team;

pub use error::*;
pub use generator::*;
pub use player::*;
pub use team::*;

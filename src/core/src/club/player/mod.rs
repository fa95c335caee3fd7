pub mod builder;
pub mod player;
pub mod position;

pub use builder::*;
pub use player::*;
pub use position::*;

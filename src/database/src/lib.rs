pub mod generators;
pub mod loaders;

pub use generators::{
    DEFAULT_PLAYERS_PER_TEAM, DEFAULT_STAR_PROBABILITY, PlayerGenerator, RosterCap, RosterError,
    RosterGenerator, RosterResult, RosterSettings, TeamGenerator,
};
pub use loaders::{NamePoolError, NamePoolLoader, NamePools};

pub mod builder;
pub mod collection;
pub mod team;

pub use builder::*;
pub use collection::*;
pub use team::*;

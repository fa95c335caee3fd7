use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("{0} pool is empty")]
    EmptyNamePool(&'static str),

    #[error("no unique player name left in the pool")]
    NamePoolExhausted,

    #[error("failed to build roster entity: {0}")]
    Build(String),
}

//! Engine error type.

use thiserror::Error;

/// Everything the rule engine can refuse to do.
///
/// Only [`EngineError::NoMove`] is expected during normal play: it reports a
/// direction that would leave the grid unchanged, and the caller's state is
/// guaranteed untouched when it is returned. The other variants signal
/// construction-time misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no tile can move in that direction")]
    NoMove,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cannot spawn {requested} tiles into {available} empty cells")]
    NotEnoughEmptyCells { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;

//! Crate error type.

use thiserror::Error;

/// Errors raised while building a problem or validating a configuration.
///
/// A search that finds no path is not an error; it is reported through
/// [`SearchStatus`](crate::search::SearchStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("disk count must be at least 1")]
    NoDisks,

    #[error("disk count {0} exceeds the supported maximum of 63")]
    TooManyDisks(usize),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("start holds {start} disks but goal holds {goal}")]
    DiskCountMismatch { start: usize, goal: usize },

    #[error("goal must be a complete tower on a single peg")]
    UnsupportedGoal,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Shared state-space search machinery.
//!
//! Both [`iddfs`](crate::iddfs) and [`astar`](crate::astar) are written
//! against the [`SearchProblem`] trait and report a [`SearchResult`], so the
//! algorithms know nothing about disks or pegs. The Tower of Hanoi is one
//! implementor, see [`Hanoi`](crate::hanoi::Hanoi).

mod result;
mod types;

pub use result::{SearchResult, SearchStatus};
pub use types::SearchProblem;

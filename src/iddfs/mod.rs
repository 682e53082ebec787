//! Iterative Deepening Depth-First Search (IDDFS).
//!
//! Runs a depth-limited DFS with bound 0, 1, 2, ... until a goal is found.
//! The first bound that reaches a goal equals the length of a shortest
//! path, so IDDFS returns optimal solutions while holding only the current
//! path in memory.
//!
//! # References
//!
//! - Korf, R. E. (1985). "Depth-first iterative-deepening: An optimal
//!   admissible tree search", *Artificial Intelligence* 27(1), 97-109.

mod config;
mod runner;

pub use config::IddfsConfig;
pub use runner::{bounded_dfs, DepthOutcome, IddfsRunner};

//! A* search.
//!
//! Best-first search that always expands the frontier entry with the
//! smallest `f = g + h`, where `g` is the number of moves taken and `h` the
//! problem's heuristic. With an admissible, consistent heuristic the first
//! goal popped lies at the end of a shortest path.
//!
//! # References
//!
//! - Hart, P. E., Nilsson, N. J. & Raphael, B. (1968). "A Formal Basis for
//!   the Heuristic Determination of Minimum Cost Paths", *IEEE Transactions
//!   on Systems Science and Cybernetics* 4(2), 100-107.

mod config;
mod runner;

pub use config::AStarConfig;
pub use runner::AStarRunner;

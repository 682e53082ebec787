//! Tower of Hanoi solved by general-purpose state-space search.
//!
//! Provides two search strategies over any [`search::SearchProblem`]:
//!
//! - **IDDFS**: Iterative Deepening Depth-First Search, optimal and
//!   memory-light, with per-path cycle avoidance.
//! - **A\***: best-first search on `f = g + h` with deterministic
//!   tie-breaking.
//!
//! Both report the solution path, the number of nodes counted and the
//! elapsed wall-clock time, so their cost can be compared on the same
//! instance.
//!
//! # Architecture
//!
//! The algorithms know nothing about the puzzle. [`hanoi`] supplies the
//! three-peg state model, the legal-move generator and the `2^k - 1`
//! heuristic, and [`report`] turns results into text for the `hanoi`
//! command-line tool.

pub mod astar;
pub mod error;
pub mod hanoi;
pub mod iddfs;
pub mod report;
pub mod search;

pub use error::{Error, Result};

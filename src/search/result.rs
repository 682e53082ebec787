//! Search outcome types.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStatus {
    /// A goal state was reached.
    Solved,
    /// The reachable space (or the problem's depth bound) was exhausted
    /// without reaching a goal.
    NoSolution,
    /// A configured resource guard stopped the search first.
    LimitReached,
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult<M> {
    /// How the run ended.
    pub status: SearchStatus,

    /// Moves from the start to the goal. `Some(vec![])` when the start
    /// already is a goal, `None` when no solution was found.
    pub path: Option<Vec<M>>,

    /// Length of `path`, when there is one.
    pub move_count: Option<usize>,

    /// Number of nodes the algorithm counted while searching.
    pub nodes_expanded: usize,

    /// Wall-clock time spent in the search.
    pub elapsed: Duration,

    /// Deepest bound tried by iterative deepening. `None` for A*.
    pub depth_reached: Option<usize>,
}

impl<M> SearchResult<M> {
    /// Creates a solved result for `path`.
    pub fn solved(path: Vec<M>, nodes_expanded: usize, elapsed: Duration) -> Self {
        Self {
            status: SearchStatus::Solved,
            move_count: Some(path.len()),
            path: Some(path),
            nodes_expanded,
            elapsed,
            depth_reached: None,
        }
    }

    /// Creates a result without a path.
    pub fn unsolved(status: SearchStatus, nodes_expanded: usize, elapsed: Duration) -> Self {
        Self {
            status,
            path: None,
            move_count: None,
            nodes_expanded,
            elapsed,
            depth_reached: None,
        }
    }

    /// Records the deepest bound tried.
    pub fn with_depth_reached(mut self, depth: usize) -> Self {
        self.depth_reached = Some(depth);
        self
    }

    /// Whether a path was found.
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_sets_move_count() {
        let result = SearchResult::solved(vec!['a', 'b', 'c'], 10, Duration::from_millis(5));
        assert!(result.is_solved());
        assert_eq!(result.move_count, Some(3));
        assert_eq!(result.path.as_deref(), Some(&['a', 'b', 'c'][..]));
        assert_eq!(result.depth_reached, None);
    }

    #[test]
    fn test_empty_path_is_still_solved() {
        let result: SearchResult<char> = SearchResult::solved(vec![], 1, Duration::ZERO);
        assert!(result.is_solved());
        assert_eq!(result.move_count, Some(0));
        assert_eq!(result.path, Some(vec![]));
    }

    #[test]
    fn test_unsolved_has_no_path() {
        let result: SearchResult<char> =
            SearchResult::unsolved(SearchStatus::NoSolution, 7, Duration::from_secs(1))
                .with_depth_reached(4);
        assert!(!result.is_solved());
        assert!(result.path.is_none());
        assert!(result.move_count.is_none());
        assert_eq!(result.depth_reached, Some(4));
        assert!((result.elapsed_secs() - 1.0).abs() < 1e-12);
    }
}

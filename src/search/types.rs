//! Core trait for graph-search problems.

use std::hash::Hash;

/// Defines a deterministic state-space search problem.
///
/// Users implement this trait to specify:
/// - Where the search starts
/// - When a state satisfies the goal
/// - How to enumerate the legal moves out of a state
/// - Optionally, a lower bound on the remaining cost
///
/// Every move costs 1, so the length of a path is its cost.
///
/// # Examples
///
/// ```
/// use hanoi_search::search::SearchProblem;
///
/// /// Count from `0` up to `target` by steps of +1 or +2.
/// struct Counter { start: u32, target: u32 }
///
/// impl SearchProblem for Counter {
///     type State = u32;
///     type Move = u32;
///
///     fn start(&self) -> &u32 { &self.start }
///     fn is_goal(&self, s: &u32) -> bool { *s == self.target }
///     fn successors(&self, s: &u32) -> Vec<(u32, u32)> {
///         [1, 2].iter().filter(|&&d| s + d <= self.target).map(|&d| (s + d, d)).collect()
///     }
///     fn heuristic(&self, s: &u32) -> u64 { u64::from((self.target - s + 1) / 2) }
/// }
/// ```
pub trait SearchProblem {
    /// The state type. Compared and hashed structurally.
    type State: Clone + Eq + Hash;

    /// The edge label reported in solution paths.
    type Move: Copy;

    /// The state the search starts from.
    fn start(&self) -> &Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All states reachable in one move, paired with the move taken.
    ///
    /// The order of the returned vector is significant: it fixes the
    /// exploration order of depth-first search and the tie-break order of
    /// best-first search.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Move)>;

    /// Lower bound on the number of moves from `state` to a goal.
    ///
    /// Must be admissible and consistent for A* to return optimal paths.
    /// The default of 0 turns A* into uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> u64 {
        0
    }

    /// Depth beyond which no optimal solution can lie, if known.
    ///
    /// Iterative deepening stops after this depth when no explicit cap is
    /// configured.
    fn depth_bound(&self) -> Option<usize> {
        None
    }
}

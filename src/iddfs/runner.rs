//! IDDFS execution engine.
//!
//! # Algorithm
//!
//! 1. For depth bound `d = 0, 1, 2, ...`:
//!    a. Reset the on-path set to `{start}`
//!    b. Run a depth-limited DFS from the start with bound `d`
//!    c. Return the first path found
//! 2. Stop with no solution when an iteration never hit its bound (the
//!    whole space was explored) or the maximum depth is passed
//!
//! The depth-limited DFS keeps an explicit stack of successor iterators, so
//! the call stack stays flat however deep the bound goes.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info};

use super::config::IddfsConfig;
use crate::search::{SearchProblem, SearchResult, SearchStatus};

/// Outcome of one depth-limited search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthOutcome<M> {
    /// Moves from the searched state to a goal.
    Found(Vec<M>),
    /// No goal within the bound, and at least one branch was cut by it.
    Cutoff,
    /// No goal, and no branch reached the bound: a deeper search would
    /// explore nothing new.
    Exhausted,
}

/// Depth-limited DFS from `root`.
///
/// `visited` holds the states on the current path; a successor already in
/// it is skipped. States are added before descending and removed after
/// backtracking, so on return `visited` is exactly as it was passed in.
/// `nodes` is incremented once for every state entered, the root included.
///
/// Successors are tried in [`SearchProblem::successors`] order and the
/// first path to reach a goal wins.
pub fn bounded_dfs<P: SearchProblem>(
    problem: &P,
    root: &P::State,
    depth_limit: usize,
    visited: &mut HashSet<P::State>,
    nodes: &mut usize,
) -> DepthOutcome<P::Move> {
    *nodes += 1;
    if problem.is_goal(root) {
        return DepthOutcome::Found(Vec::new());
    }
    if depth_limit == 0 {
        return DepthOutcome::Cutoff;
    }

    let mut cutoff = false;
    // Invariant: path_states.len() == moves.len() == stack.len() - 1.
    let mut moves: Vec<P::Move> = Vec::new();
    let mut path_states: Vec<P::State> = Vec::new();
    let mut stack = vec![problem.successors(root).into_iter()];

    while let Some(frame) = stack.last_mut() {
        let Some((next, mv)) = frame.next() else {
            stack.pop();
            if let Some(state) = path_states.pop() {
                visited.remove(&state);
                moves.pop();
            }
            continue;
        };

        if visited.contains(&next) {
            continue;
        }

        *nodes += 1;
        if problem.is_goal(&next) {
            moves.push(mv);
            for state in path_states.drain(..) {
                visited.remove(&state);
            }
            return DepthOutcome::Found(moves);
        }

        // `next` sits at depth stack.len()
        if stack.len() == depth_limit {
            cutoff = true;
            continue;
        }

        let children = problem.successors(&next).into_iter();
        visited.insert(next.clone());
        path_states.push(next);
        moves.push(mv);
        stack.push(children);
    }

    if cutoff {
        DepthOutcome::Cutoff
    } else {
        DepthOutcome::Exhausted
    }
}

/// IDDFS runner.
pub struct IddfsRunner;

impl IddfsRunner {
    /// Executes IDDFS on the given problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_search::hanoi::Hanoi;
    /// use hanoi_search::iddfs::{IddfsConfig, IddfsRunner};
    ///
    /// let problem = Hanoi::new(2).unwrap();
    /// let result = IddfsRunner::run(&problem, &IddfsConfig::default());
    /// assert_eq!(result.move_count, Some(3));
    /// ```
    pub fn run<P: SearchProblem>(problem: &P, config: &IddfsConfig) -> SearchResult<P::Move> {
        let started = Instant::now();
        let start = problem.start();

        // A configured cap below the problem's own bound is a resource
        // guard; running past the problem's bound means there is no solution.
        let (max_depth, guarded) = match (config.max_depth, problem.depth_bound()) {
            (Some(cap), Some(bound)) if bound <= cap => (Some(bound), false),
            (Some(cap), _) => (Some(cap), true),
            (None, bound) => (bound, false),
        };

        let mut nodes = 0usize;
        let mut visited = HashSet::new();
        let mut depth = 0usize;

        loop {
            if let Some(max) = max_depth {
                if depth > max {
                    let status = if guarded {
                        SearchStatus::LimitReached
                    } else {
                        SearchStatus::NoSolution
                    };
                    info!(?status, nodes, max_depth = max, "iddfs stopped without a solution");
                    return SearchResult::unsolved(status, nodes, started.elapsed())
                        .with_depth_reached(max);
                }
            }

            visited.clear();
            visited.insert(start.clone());
            let before = nodes;
            let outcome = bounded_dfs(problem, start, depth, &mut visited, &mut nodes);
            debug!(depth, nodes = nodes - before, "iddfs depth iteration finished");

            match outcome {
                DepthOutcome::Found(path) => {
                    info!(depth, moves = path.len(), nodes, "iddfs found a solution");
                    return SearchResult::solved(path, nodes, started.elapsed())
                        .with_depth_reached(depth);
                }
                DepthOutcome::Exhausted => {
                    info!(depth, nodes, "iddfs exhausted the search space");
                    return SearchResult::unsolved(SearchStatus::NoSolution, nodes, started.elapsed())
                        .with_depth_reached(depth);
                }
                DepthOutcome::Cutoff => depth += 1,
            }
        }
    }
}

//! Tower of Hanoi as a search problem.
//!
//! Three pegs, `n` disks, and a goal of moving the whole tower from the
//! Origin peg to the Destination peg one disk at a time, never placing a
//! disk on a smaller one. The shortest solution takes `2^n - 1` moves.
//!
//! [`Hanoi`] implements [`SearchProblem`] so both
//! [`IddfsRunner`] and [`AStarRunner`] can solve it; [`solve_iddfs`] and
//! [`solve_astar`] wrap the common case.

mod heuristic;
mod state;
mod successors;

pub use heuristic::{heuristic, heuristic_towards, optimal_distance};
pub use state::{Disk, Move, Peg, State};
pub use successors::successors;

use crate::astar::{AStarConfig, AStarRunner};
use crate::error::{Error, Result};
use crate::iddfs::{IddfsConfig, IddfsRunner};
use crate::search::{SearchProblem, SearchResult};

/// Largest supported disk count, so that `2^n` fits in a `u64`.
pub const MAX_DISKS: usize = 63;

/// Length of the shortest solution for `disks` disks: `2^disks - 1`.
pub fn minimal_moves(disks: usize) -> u64 {
    heuristic::mersenne(disks.min(64) as Disk)
}

/// A Tower of Hanoi instance: a legal start state and a complete goal tower.
///
/// # Examples
///
/// ```
/// use hanoi_search::hanoi::{Hanoi, Peg, State};
/// use hanoi_search::search::SearchProblem;
///
/// let problem = Hanoi::new(3).unwrap();
/// assert_eq!(problem.start(), &State::tower(3, Peg::Origin));
/// assert_eq!(problem.goal(), &State::tower(3, Peg::Destination));
/// assert_eq!(problem.depth_bound(), Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct Hanoi {
    start: State,
    goal: State,
    target: Peg,
    disks: usize,
}

impl Hanoi {
    /// The classic puzzle: `disks` disks from Origin to Destination.
    pub fn new(disks: usize) -> Result<Self> {
        Self::with_states(
            State::tower(disks, Peg::Origin),
            State::tower(disks, Peg::Destination),
        )
    }

    /// An instance with an arbitrary legal start and a complete goal tower.
    pub fn with_states(start: State, goal: State) -> Result<Self> {
        let disks = start.disk_count();
        if disks == 0 {
            return Err(Error::NoDisks);
        }
        if disks > MAX_DISKS {
            return Err(Error::TooManyDisks(disks));
        }
        if goal.disk_count() != disks {
            return Err(Error::DiskCountMismatch {
                start: disks,
                goal: goal.disk_count(),
            });
        }
        start.validate()?;
        goal.validate()?;
        let target = goal.tower_peg().ok_or(Error::UnsupportedGoal)?;

        Ok(Self {
            start,
            goal,
            target,
            disks,
        })
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    pub fn disks(&self) -> usize {
        self.disks
    }

    /// The peg the goal tower stands on.
    pub fn target(&self) -> Peg {
        self.target
    }

    /// Exact number of moves left from the start.
    pub fn optimal_moves(&self) -> u64 {
        optimal_distance(&self.start, self.target)
    }
}

impl SearchProblem for Hanoi {
    type State = State;
    type Move = Move;

    fn start(&self) -> &State {
        &self.start
    }

    fn is_goal(&self, state: &State) -> bool {
        state.is_goal(&self.goal)
    }

    fn successors(&self, state: &State) -> Vec<(State, Move)> {
        successors(state)
    }

    fn heuristic(&self, state: &State) -> u64 {
        heuristic_towards(state, self.target)
    }

    /// `2^n`: one past the length of the longest optimal solution.
    fn depth_bound(&self) -> Option<usize> {
        let bound = usize::try_from(minimal_moves(self.disks))
            .map_or(usize::MAX, |m| m.saturating_add(1));
        Some(bound)
    }
}

/// Solves `start -> goal` with iterative deepening.
///
/// # Errors
///
/// Fails when `disks` does not match the states, or when the states are
/// not a valid instance (see [`Hanoi::with_states`]).
pub fn solve_iddfs(start: &State, goal: &State, disks: usize) -> Result<SearchResult<Move>> {
    let problem = instance(start, goal, disks)?;
    Ok(IddfsRunner::run(&problem, &IddfsConfig::default()))
}

/// Solves `start -> goal` with A*.
///
/// # Errors
///
/// Same conditions as [`solve_iddfs`].
pub fn solve_astar(start: &State, goal: &State, disks: usize) -> Result<SearchResult<Move>> {
    let problem = instance(start, goal, disks)?;
    Ok(AStarRunner::run(&problem, &AStarConfig::default()))
}

fn instance(start: &State, goal: &State, disks: usize) -> Result<Hanoi> {
    if start.disk_count() != disks {
        return Err(Error::DiskCountMismatch {
            start: start.disk_count(),
            goal: disks,
        });
    }
    Hanoi::with_states(start.clone(), goal.clone())
}

/// Applies `path` to `start`, returning every state visited, `start` first.
///
/// Fails on the first illegal move.
pub fn replay(start: &State, path: &[Move]) -> Result<Vec<State>> {
    let mut states = Vec::with_capacity(path.len() + 1);
    states.push(start.clone());
    for (i, &mv) in path.iter().enumerate() {
        let current = &states[states.len() - 1];
        let next = current
            .apply(mv)
            .ok_or_else(|| Error::InvalidState(format!("move {} ({mv}) is illegal", i + 1)))?;
        states.push(next);
    }
    Ok(states)
}

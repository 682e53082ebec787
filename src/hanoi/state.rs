//! Pegs, moves and puzzle states.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A disk, identified by its size. Disk 1 is the smallest.
pub type Disk = u32;

/// One of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Peg {
    Origin = 0,
    Auxiliary = 1,
    Destination = 2,
}

impl Peg {
    /// All pegs in index order.
    pub const ALL: [Peg; 3] = [Peg::Origin, Peg::Auxiliary, Peg::Destination];

    /// 0-based index of the peg.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Peg for a 0-based index.
    pub fn from_index(index: usize) -> Option<Peg> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Peg::Origin => "Origin",
            Peg::Auxiliary => "Auxiliary",
            Peg::Destination => "Destination",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }

    /// The move as a pair of 0-based peg indices.
    pub fn indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A configuration of all three pegs.
///
/// Each peg lists its disks bottom to top, so the top disk is the last
/// element. States are values: every transition produces a new `State`, and
/// equality and hashing cover the full contents of all three pegs.
///
/// # Examples
///
/// ```
/// use hanoi_search::hanoi::{Move, Peg, State};
///
/// let start = State::tower(2, Peg::Origin);
/// let next = start.apply(Move::new(Peg::Origin, Peg::Auxiliary)).unwrap();
/// assert_eq!(next.peg(Peg::Origin), &[2]);
/// assert_eq!(next.peg(Peg::Auxiliary), &[1]);
/// assert_eq!(start.peg(Peg::Origin), &[2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PegsRepr"))]
pub struct State {
    pegs: [Vec<Disk>; 3],
}

/// Unchecked wire form of a [`State`]; deserialized states go through
/// [`State::from_pegs`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PegsRepr {
    pegs: [Vec<Disk>; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<PegsRepr> for State {
    type Error = Error;

    fn try_from(repr: PegsRepr) -> Result<Self> {
        Self::from_pegs(repr.pegs)
    }
}

/// Disk label for a count or position, saturating at [`Disk::MAX`].
fn disk_label(n: usize) -> Disk {
    Disk::try_from(n).unwrap_or(Disk::MAX)
}

impl State {
    /// A complete tower of `disks` disks stacked on `peg`.
    ///
    /// Counts above [`Disk::MAX`] are clamped to it.
    pub fn tower(disks: usize, peg: Peg) -> Self {
        let mut pegs: [Vec<Disk>; 3] = Default::default();
        pegs[peg.index()] = (1..=disk_label(disks)).rev().collect();
        Self { pegs }
    }

    /// Builds a state from explicit peg contents, bottom to top.
    ///
    /// Fails unless every peg is strictly decreasing and the pegs together
    /// hold exactly the disks `1..=n`.
    pub fn from_pegs(pegs: [Vec<Disk>; 3]) -> Result<Self> {
        let state = Self { pegs };
        state.validate()?;
        Ok(state)
    }

    /// Places disk `i + 1` on `assignment[i]`, stacking each peg by size.
    ///
    /// Every assignment of at most [`Disk::MAX`] disks yields a legal state,
    /// and every legal state comes from exactly one assignment.
    pub fn from_assignment(assignment: &[Peg]) -> Self {
        let mut pegs: [Vec<Disk>; 3] = Default::default();
        for (i, peg) in assignment.iter().enumerate().rev() {
            pegs[peg.index()].push(disk_label(i + 1));
        }
        Self { pegs }
    }

    /// A uniformly random legal state of `disks` disks.
    pub fn random<R: Rng>(disks: usize, rng: &mut R) -> Self {
        let assignment: Vec<Peg> = (0..disks)
            .map(|_| Peg::ALL[rng.random_range(0..Peg::ALL.len())])
            .collect();
        Self::from_assignment(&assignment)
    }

    /// Disks on `peg`, bottom to top.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// Top disk of `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    /// Total number of disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// The peg holding every disk, if the state is a single tower.
    pub fn tower_peg(&self) -> Option<Peg> {
        let count = self.disk_count();
        Peg::ALL
            .into_iter()
            .find(|&peg| self.peg(peg).len() == count)
    }

    /// Whether `mv` is legal here: the origin is not empty, and its top disk
    /// is smaller than the destination's top disk (or the destination is
    /// empty).
    pub fn can_apply(&self, mv: Move) -> bool {
        if mv.from == mv.to {
            return false;
        }
        match (self.top(mv.from), self.top(mv.to)) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(disk), Some(below)) => disk < below,
        }
    }

    /// The state after `mv`, or `None` if the move is illegal.
    pub fn apply(&self, mv: Move) -> Option<State> {
        if !self.can_apply(mv) {
            return None;
        }
        let mut pegs = self.pegs.clone();
        let disk = pegs[mv.from.index()].pop()?;
        pegs[mv.to.index()].push(disk);
        Some(State { pegs })
    }

    /// Whether this state equals `goal`.
    pub fn is_goal(&self, goal: &State) -> bool {
        self == goal
    }

    /// Checks the peg ordering and disk conservation invariants.
    pub fn validate(&self) -> Result<()> {
        for peg in Peg::ALL {
            let disks = self.peg(peg);
            if disks.windows(2).any(|w| w[0] <= w[1]) {
                return Err(Error::InvalidState(format!(
                    "{peg} peg is not strictly decreasing: {disks:?}"
                )));
            }
        }

        let mut all: Vec<Disk> = self.pegs.iter().flatten().copied().collect();
        all.sort_unstable();
        let expected = (1..=disk_label(all.len())).collect::<Vec<_>>();
        if all != expected {
            return Err(Error::InvalidState(format!(
                "disks {all:?} are not exactly 1..={}",
                all.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in Peg::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<11}: {:?}", peg.name(), self.peg(peg))?;
        }
        Ok(())
    }
}

//! Remaining-cost estimates for reaching a complete tower.

use super::state::{Disk, Peg, State};

/// `2^k - 1`, where `k` is the largest disk not yet on the Destination peg.
///
/// Exact on complete towers (`2^n - 1` from the start, 0 at the goal). On
/// mixed states it can exceed the true distance: from
/// `([2], [1], [])` the goal is 2 moves away but the estimate is 3. The
/// overestimate is uniform enough along shortest paths that A* still
/// returns optimal move counts; see [`optimal_distance`] for the exact value.
///
/// # Examples
///
/// ```
/// use hanoi_search::hanoi::{heuristic, Peg, State};
///
/// assert_eq!(heuristic(&State::tower(3, Peg::Origin)), 7);
/// assert_eq!(heuristic(&State::tower(3, Peg::Destination)), 0);
/// ```
pub fn heuristic(state: &State) -> u64 {
    heuristic_towards(state, Peg::Destination)
}

/// Same estimate as [`heuristic`] for a goal tower on `target`.
pub fn heuristic_towards(state: &State, target: Peg) -> u64 {
    let k = Peg::ALL
        .into_iter()
        .filter(|&peg| peg != target)
        .filter_map(|peg| state.peg(peg).iter().copied().max())
        .max()
        .unwrap_or(0);
    mersenne(k)
}

/// Exact number of moves from `state` to a complete tower on `target`.
///
/// Walks the disks from largest to smallest. A disk already on its
/// target costs nothing; otherwise it must move once, after the smaller
/// disks have been parked on the remaining peg, which costs `2^(i-1)` in
/// total, and the parking peg becomes the target for the smaller disks.
pub fn optimal_distance(state: &State, target: Peg) -> u64 {
    let n = state.disk_count();
    let mut position = vec![Peg::Origin; n + 1];
    for peg in Peg::ALL {
        for &disk in state.peg(peg) {
            position[disk as usize] = peg;
        }
    }

    let mut target = target;
    let mut distance = 0u64;
    for disk in (1..=n).rev() {
        let at = position[disk];
        if at != target {
            distance = distance.saturating_add(mersenne(disk as Disk - 1).saturating_add(1));
            target = third_peg(at, target);
        }
    }
    distance
}

fn third_peg(a: Peg, b: Peg) -> Peg {
    Peg::ALL
        .into_iter()
        .find(|&p| p != a && p != b)
        .unwrap_or(a)
}

/// `2^k - 1`, saturating at `u64::MAX` for `k >= 64`.
pub(crate) fn mersenne(k: Disk) -> u64 {
    match k {
        0 => 0,
        k if k >= 64 => u64::MAX,
        k => u64::MAX >> (64 - k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanoi::successors;
    use proptest::prelude::*;

    #[test]
    fn test_goal_is_zero() {
        for n in 0..10 {
            assert_eq!(heuristic(&State::tower(n, Peg::Destination)), 0);
        }
    }

    #[test]
    fn test_tight_at_start() {
        for n in 1..=20usize {
            assert_eq!(
                heuristic(&State::tower(n, Peg::Origin)),
                (1u64 << n) - 1,
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_ignores_disks_already_home() {
        // 3 is home; 2 is the largest misplaced disk.
        let s = State::from_pegs([vec![1], vec![2], vec![3]]).unwrap();
        assert_eq!(heuristic(&s), 3);
    }

    #[test]
    fn test_overestimates_mixed_state() {
        let s = State::from_pegs([vec![2], vec![1], vec![]]).unwrap();
        assert_eq!(heuristic(&s), 3);
        assert_eq!(optimal_distance(&s, Peg::Destination), 2);
    }

    #[test]
    fn test_towards_other_peg() {
        let s = State::tower(4, Peg::Auxiliary);
        assert_eq!(heuristic_towards(&s, Peg::Auxiliary), 0);
        assert_eq!(heuristic_towards(&s, Peg::Origin), 15);
    }

    #[test]
    fn test_optimal_distance_between_towers() {
        for n in 0..=30usize {
            let start = State::tower(n, Peg::Origin);
            assert_eq!(optimal_distance(&start, Peg::Destination), mersenne(n as Disk));
            assert_eq!(optimal_distance(&start, Peg::Origin), 0);
        }
    }

    #[test]
    fn test_mersenne() {
        assert_eq!(mersenne(0), 0);
        assert_eq!(mersenne(1), 1);
        assert_eq!(mersenne(10), 1023);
        assert_eq!(mersenne(63), (1u64 << 63) - 1);
        assert_eq!(mersenne(64), u64::MAX);
        assert_eq!(mersenne(200), u64::MAX);
    }

    proptest! {
        /// Exactly one neighbour of a non-goal state is one move closer, and
        /// no neighbour is more than one move away from it.
        #[test]
        fn prop_optimal_distance_is_a_shortest_path_metric(
            idx in prop::collection::vec(0usize..3, 1..=10),
            target in 0usize..3,
        ) {
            let assignment: Vec<Peg> = idx.into_iter().map(|i| Peg::ALL[i]).collect();
            let state = State::from_assignment(&assignment);
            let target = Peg::ALL[target];
            let d = optimal_distance(&state, target);
            prop_assert_eq!(d == 0, state.tower_peg() == Some(target));

            let neighbours: Vec<u64> = successors(&state)
                .iter()
                .map(|(next, _)| optimal_distance(next, target))
                .collect();
            for &nd in &neighbours {
                prop_assert!(nd + 1 >= d && nd <= d + 1);
            }
            if d > 0 {
                prop_assert!(neighbours.contains(&(d - 1)));
            }
        }
    }
}

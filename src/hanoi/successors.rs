//! Successor generation.

use super::state::{Move, Peg, State};

/// Every legal single-disk move out of `state`, with the resulting state.
///
/// Pairs are enumerated origin-major, destination-minor in peg index order:
/// `(0,1), (0,2), (1,0), (1,2), (2,0), (2,1)`. Illegal pairs are skipped, so
/// every returned state satisfies the peg ordering invariant.
pub fn successors(state: &State) -> Vec<(State, Move)> {
    let mut out = Vec::with_capacity(3);
    for from in Peg::ALL {
        if state.top(from).is_none() {
            continue;
        }
        for to in Peg::ALL {
            if from == to {
                continue;
            }
            let mv = Move::new(from, to);
            if let Some(next) = state.apply(mv) {
                out.push((next, mv));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_start_state_successors() {
        let start = State::tower(3, Peg::Origin);
        let moves: Vec<(usize, usize)> = successors(&start)
            .iter()
            .map(|(_, mv)| mv.indices())
            .collect();
        assert_eq!(moves, vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn test_generator_order_is_origin_major() {
        // Origin [3], Auxiliary [2], Destination [1]
        let s = State::from_pegs([vec![3], vec![2], vec![1]]).unwrap();
        let moves: Vec<(usize, usize)> = successors(&s).iter().map(|(_, mv)| mv.indices()).collect();
        assert_eq!(moves, vec![(1, 0), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_single_disk_has_two_successors() {
        let s = State::tower(1, Peg::Auxiliary);
        let next: Vec<State> = successors(&s).into_iter().map(|(s, _)| s).collect();
        assert_eq!(next, vec![State::tower(1, Peg::Origin), State::tower(1, Peg::Destination)]);
    }

    #[test]
    fn test_empty_state_has_no_successors() {
        assert!(successors(&State::tower(0, Peg::Origin)).is_empty());
    }

    fn arb_state() -> impl Strategy<Value = State> {
        prop::collection::vec(0usize..3, 1..=8).prop_map(|idx| {
            let assignment: Vec<Peg> = idx.into_iter().map(|i| Peg::ALL[i]).collect();
            State::from_assignment(&assignment)
        })
    }

    proptest! {
        #[test]
        fn prop_successors_preserve_invariants(state in arb_state()) {
            let succ = successors(&state);
            // Two or three moves exist from any state with at least one disk.
            prop_assert!(succ.len() == 2 || succ.len() == 3);
            for (next, mv) in succ {
                prop_assert!(next.validate().is_ok());
                prop_assert_eq!(next.disk_count(), state.disk_count());
                prop_assert_ne!(mv.from, mv.to);
                prop_assert_eq!(next.top(mv.to), state.top(mv.from));
                // Moving the disk straight back restores the parent.
                let back = next.apply(Move::new(mv.to, mv.from));
                prop_assert_eq!(back.as_ref(), Some(&state));
            }
        }
    }
}

//! A* execution engine.
//!
//! # Algorithm
//!
//! 1. Push the start with `g = 0`, record `best_g[start] = 0`
//! 2. Pop the entry with the smallest `(f, g, insertion order)`:
//!    a. If it is a goal, rebuild its path and stop
//!    b. Otherwise, for every successor with `g + 1` below its recorded
//!       `best_g`, record the new `g` and push it
//! 3. Stop with no solution when the frontier empties
//!
//! Paths are not copied into frontier entries. Each pushed entry appends a
//! node to a trail holding its parent index and the move that reached it,
//! and the winning path is rebuilt by walking parents back to the start.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, info, trace};

use super::config::AStarConfig;
use crate::search::{SearchProblem, SearchResult, SearchStatus};

/// A frontier entry. Ordered so that `BinaryHeap` pops the smallest
/// `(f, g, seq)` first; `seq` is unique, which makes ties deterministic.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u64,
    g: usize,
    seq: usize,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f, other.g, other.seq).cmp(&(self.f, self.g, self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct TrailNode<S, M> {
    state: S,
    parent: Option<usize>,
    via: Option<M>,
}

/// Records `g` for `state` if it beats the best known cost.
///
/// Returns whether the record changed. Recorded costs only ever decrease.
fn relax<S: Clone + Eq + Hash>(best_g: &mut HashMap<S, usize>, state: &S, g: usize) -> bool {
    match best_g.get(state) {
        Some(&known) if known <= g => false,
        _ => {
            best_g.insert(state.clone(), g);
            true
        }
    }
}

fn rebuild_path<S, M: Copy>(trail: &[TrailNode<S, M>], mut node: usize) -> Vec<M> {
    let mut path = Vec::new();
    while let Some(parent) = trail[node].parent {
        if let Some(mv) = trail[node].via {
            path.push(mv);
        }
        node = parent;
    }
    path.reverse();
    path
}

/// A* runner.
pub struct AStarRunner;

impl AStarRunner {
    /// Executes A* on the given problem.
    ///
    /// `nodes_expanded` starts at 1 for the start state and grows by one
    /// for every successor generated, whether or not it is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_search::astar::{AStarConfig, AStarRunner};
    /// use hanoi_search::hanoi::Hanoi;
    ///
    /// let problem = Hanoi::new(3).unwrap();
    /// let result = AStarRunner::run(&problem, &AStarConfig::default());
    /// assert_eq!(result.move_count, Some(7));
    /// ```
    pub fn run<P: SearchProblem>(problem: &P, config: &AStarConfig) -> SearchResult<P::Move> {
        let started = Instant::now();
        let start = problem.start().clone();

        let mut frontier = BinaryHeap::new();
        let mut best_g: HashMap<P::State, usize> = HashMap::new();
        let mut trail: Vec<TrailNode<P::State, P::Move>> = Vec::new();
        let mut seq = 0usize;
        let mut nodes = 1usize;
        let mut expansions = 0usize;

        frontier.push(FrontierEntry {
            f: problem.heuristic(&start),
            g: 0,
            seq,
            node: 0,
        });
        best_g.insert(start.clone(), 0);
        trail.push(TrailNode {
            state: start,
            parent: None,
            via: None,
        });

        while let Some(entry) = frontier.pop() {
            if problem.is_goal(&trail[entry.node].state) {
                let path = rebuild_path(&trail, entry.node);
                debug!(
                    frontier = frontier.len(),
                    known_states = best_g.len(),
                    "astar reached the goal"
                );
                info!(moves = entry.g, nodes, expansions, "astar found a solution");
                return SearchResult::solved(path, nodes, started.elapsed());
            }

            if config.max_expansions.is_some_and(|limit| expansions >= limit) {
                info!(nodes, expansions, "astar stopped at the expansion limit");
                return SearchResult::unsolved(SearchStatus::LimitReached, nodes, started.elapsed());
            }
            expansions += 1;

            let successors = problem.successors(&trail[entry.node].state);
            for (next, mv) in successors {
                nodes += 1;
                let g = entry.g + 1;
                if !relax(&mut best_g, &next, g) {
                    continue;
                }
                seq += 1;
                let f = (g as u64).saturating_add(problem.heuristic(&next));
                trail.push(TrailNode {
                    state: next,
                    parent: Some(entry.node),
                    via: Some(mv),
                });
                frontier.push(FrontierEntry {
                    f,
                    g,
                    seq,
                    node: trail.len() - 1,
                });
            }
            trace!(f = entry.f, g = entry.g, frontier = frontier.len(), "astar expanded");
        }

        info!(nodes, expansions, "astar emptied the frontier");
        SearchResult::unsolved(SearchStatus::NoSolution, nodes, started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Small explicit graph ----

    /// Directed graph over `0..edges.len()`; each node lists (next, label).
    struct Graph {
        edges: Vec<Vec<(usize, char)>>,
        h: Vec<u64>,
        start: usize,
        goal: usize,
    }

    impl SearchProblem for Graph {
        type State = usize;
        type Move = char;

        fn start(&self) -> &usize {
            &self.start
        }

        fn is_goal(&self, s: &usize) -> bool {
            *s == self.goal
        }

        fn successors(&self, &s: &usize) -> Vec<(usize, char)> {
            self.edges[s].clone()
        }

        fn heuristic(&self, &s: &usize) -> u64 {
            self.h[s]
        }
    }

    fn diamond() -> Graph {
        // 0 -a-> 1 -b-> 3 ; 0 -c-> 2 -d-> 4 -e-> 3
        Graph {
            edges: vec![
                vec![(1, 'a'), (2, 'c')],
                vec![(3, 'b')],
                vec![(4, 'd')],
                vec![],
                vec![(3, 'e')],
            ],
            h: vec![0; 5],
            start: 0,
            goal: 3,
        }
    }

    #[test]
    fn test_astar_shortest_path() {
        let result = AStarRunner::run(&diamond(), &AStarConfig::default());
        assert_eq!(result.status, SearchStatus::Solved);
        assert_eq!(result.path, Some(vec!['a', 'b']));
        assert_eq!(result.move_count, Some(2));
        assert!(result.depth_reached.is_none());
    }

    #[test]
    fn test_astar_start_is_goal() {
        let graph = Graph {
            goal: 0,
            ..diamond()
        };
        let result = AStarRunner::run(&graph, &AStarConfig::default());
        assert_eq!(result.path, Some(vec![]));
        assert_eq!(result.move_count, Some(0));
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_astar_unreachable_goal() {
        let mut graph = diamond();
        graph.edges[1].clear();
        graph.edges[4].clear();
        let result = AStarRunner::run(&graph, &AStarConfig::default());
        assert_eq!(result.status, SearchStatus::NoSolution);
        assert!(result.path.is_none());
        assert!(result.move_count.is_none());
        // start + successors of 0 (2) + successors of 2 (1)
        assert_eq!(result.nodes_expanded, 4);
    }

    #[test]
    fn test_astar_counts_generated_successors() {
        // Pops 0 (2 successors), 1 (1), 2 (1), then the goal.
        let result = AStarRunner::run(&diamond(), &AStarConfig::default());
        assert_eq!(result.nodes_expanded, 5);
    }

    #[test]
    fn test_astar_heuristic_guides_order() {
        // An overestimate on 1 keeps it behind the longer branch.
        let mut graph = diamond();
        graph.h = vec![0, 5, 0, 0, 0];
        let result = AStarRunner::run(&graph, &AStarConfig::default());
        assert_eq!(result.path, Some(vec!['c', 'd', 'e']));
    }

    #[test]
    fn test_astar_tie_break_is_insertion_order() {
        // Both branches reach the goal in one move with equal f and g.
        let graph = Graph {
            edges: vec![vec![(1, 'x'), (2, 'y')], vec![], vec![]],
            h: vec![0; 3],
            start: 0,
            goal: 1,
        };
        let result = AStarRunner::run(&graph, &AStarConfig::default());
        assert_eq!(result.path, Some(vec!['x']));

        let graph = Graph {
            edges: vec![vec![(2, 'y'), (1, 'x')], vec![], vec![]],
            goal: 2,
            ..graph
        };
        let result = AStarRunner::run(&graph, &AStarConfig::default());
        assert_eq!(result.path, Some(vec!['y']));
    }

    #[test]
    fn test_astar_expansion_limit() {
        let config = AStarConfig::default().with_max_expansions(1);
        let result = AStarRunner::run(&diamond(), &config);
        assert_eq!(result.status, SearchStatus::LimitReached);
        assert!(result.path.is_none());
        assert_eq!(result.nodes_expanded, 3);

        let config = AStarConfig::default().with_max_expansions(0);
        let result = AStarRunner::run(&diamond(), &config);
        assert_eq!(result.status, SearchStatus::LimitReached);
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_relax_only_decreases() {
        let mut best_g = HashMap::new();
        assert!(relax(&mut best_g, &"s", 5));
        assert!(!relax(&mut best_g, &"s", 5));
        assert!(!relax(&mut best_g, &"s", 7));
        assert!(relax(&mut best_g, &"s", 3));
        assert_eq!(best_g.get("s"), Some(&3));
    }

    #[test]
    fn test_rebuild_path_walks_parents() {
        let trail = vec![
            TrailNode { state: 0, parent: None, via: None },
            TrailNode { state: 1, parent: Some(0), via: Some('a') },
            TrailNode { state: 2, parent: Some(1), via: Some('b') },
            TrailNode { state: 3, parent: Some(0), via: Some('c') },
        ];
        assert_eq!(rebuild_path(&trail, 2), vec!['a', 'b']);
        assert_eq!(rebuild_path(&trail, 3), vec!['c']);
        assert!(rebuild_path(&trail, 0).is_empty());
    }
}

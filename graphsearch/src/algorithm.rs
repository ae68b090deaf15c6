//! The best-first search loop shared by both query modes.

use std::cmp;
use std::rc::Rc;

use self::frontier::Frontier;
use self::ledger::ScoreLedger;
use crate::traits::GraphSearcher;

pub(crate) mod frontier;
pub(crate) mod ledger;

/// Selects how much of the graph a search explores.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SearchMode {
    /// Stop at the first terminal state popped from the frontier.
    FirstComplete,
    /// Run the frontier dry, keeping every optimal terminal path.
    Exhaustive,
}

/// Walk the graph best-first from `start`.
///
/// Returns the collected terminal paths tied for the minimum cost,
/// along with that cost. The cost is `None` exactly when no terminal
/// was reached, in which case the path collection is empty.
pub(crate) fn search<G>(
    graph: &G,
    start: G::Node,
    mode: SearchMode,
) -> (Vec<Vec<G::Node>>, Option<G::Weight>)
where
    G: GraphSearcher + ?Sized,
{
    let mut frontier = Frontier::new();
    let mut scores = ScoreLedger::new();

    let estimate = graph.heuristic(&start);
    scores.record(start.clone(), G::Weight::default());
    frontier.push(start, G::Weight::default(), estimate, None);

    let mut best: Option<G::Weight> = None;
    let mut complete: Vec<(Vec<G::Node>, G::Weight)> = Vec::new();

    while let Some(state) = frontier.pop() {
        let current = Rc::new(state);

        if graph.is_terminal(&current.node) {
            best = Some(match best {
                Some(cost) => cmp::min(cost, current.cost),
                None => current.cost,
            });
            complete.push((current.path(), current.cost));
            if mode == SearchMode::FirstComplete {
                break;
            }
        }

        for neighbor in graph.neighbors(&current.node) {
            let tentative = current.cost + graph.edge_weight(&current.node, &neighbor);

            // No pruning happens before the first terminal pop.
            if best.map(|cost| tentative > cost).unwrap_or(false) {
                continue;
            }

            // Exhaustive searches relax ties again, so every
            // predecessor tied for optimality can reach a terminal.
            let relax = match (scores.best(&neighbor), mode) {
                (None, _) => true,
                (Some(known), SearchMode::FirstComplete) => tentative < known,
                (Some(known), SearchMode::Exhaustive) => tentative <= known,
            };
            if !relax {
                continue;
            }

            scores.record(neighbor.clone(), tentative);
            let estimate = tentative + graph.heuristic(&neighbor);
            frontier.push(neighbor, tentative, estimate, Some(current.clone()));
        }
    }

    // Terminals popped before a cheaper one was known are dropped here.
    let paths = match best {
        Some(cost) => complete
            .into_iter()
            .filter(|(_, c)| *c == cost)
            .map(|(path, _)| path)
            .collect(),
        None => Vec::new(),
    };

    (paths, best)
}

#[cfg(test)]
mod test {

    use std::collections::HashMap;

    use crate::{GraphSearcher, SearchError};

    /// Directed adjacency-list graph with named nodes.
    struct Maze {
        edges: HashMap<&'static str, Vec<(&'static str, usize)>>,
        goals: Vec<&'static str>,
        estimates: HashMap<&'static str, usize>,
    }

    impl Maze {
        fn new(edges: &[(&'static str, &'static str, usize)], goals: &[&'static str]) -> Self {
            let mut adjacency: HashMap<&'static str, Vec<(&'static str, usize)>> = HashMap::new();
            for &(origin, destination, weight) in edges {
                adjacency
                    .entry(origin)
                    .or_insert_with(Vec::new)
                    .push((destination, weight));
            }
            Maze {
                edges: adjacency,
                goals: goals.to_vec(),
                estimates: HashMap::new(),
            }
        }

        fn with_estimates(mut self, estimates: &[(&'static str, usize)]) -> Self {
            self.estimates = estimates.iter().copied().collect();
            self
        }
    }

    impl GraphSearcher for Maze {
        type Node = &'static str;
        type Weight = usize;

        fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
            self.edges
                .get(node)
                .map(|targets| targets.iter().map(|(next, _)| *next).collect())
                .unwrap_or_default()
        }

        fn edge_weight(&self, origin: &Self::Node, neighbor: &Self::Node) -> usize {
            self.edges[origin]
                .iter()
                .find(|(next, _)| next == neighbor)
                .map(|(_, weight)| *weight)
                .unwrap()
        }

        fn is_terminal(&self, node: &Self::Node) -> bool {
            self.goals.contains(node)
        }

        fn heuristic(&self, node: &Self::Node) -> usize {
            self.estimates.get(node).copied().unwrap_or(0)
        }
    }

    #[test]
    fn line_graph() {
        let maze = Maze::new(&[("A", "B", 1), ("B", "C", 1)], &["C"]);

        let (path, cost) = maze.best_path("A").unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_eq!(cost, 2);
    }

    #[test]
    fn diamond_finds_both_paths() {
        let maze = Maze::new(
            &[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)],
            &["D"],
        );

        let (mut paths, cost) = maze.all_best_paths("A");
        assert_eq!(cost, Some(2));

        paths.sort();
        assert_eq!(paths, vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]);
    }

    #[test]
    fn no_path() {
        let maze = Maze::new(&[], &["Z"]);

        match maze.best_path("A") {
            Err(SearchError::NoPathFound) => {}
            other => panic!("expected NoPathFound, got {:?}", other.map(|r| r.0)),
        }

        let (paths, cost) = maze.all_best_paths("A");
        assert!(paths.is_empty());
        assert_eq!(cost, None);
    }

    #[test]
    fn keeps_only_minimum_cost_terminals() {
        // T1 enters the frontier before T2 is popped, so it is popped
        // and recorded after the minimum is already known.
        let maze = Maze::new(
            &[("A", "X", 1), ("X", "T1", 4), ("A", "T2", 3)],
            &["T1", "T2"],
        );

        let (paths, cost) = maze.all_best_paths("A");
        assert_eq!(cost, Some(3));
        assert_eq!(paths, vec![vec!["A", "T2"]]);
    }

    #[test]
    fn both_modes_agree_on_cost() {
        let maze = Maze::new(
            &[
                ("A", "B", 2),
                ("A", "C", 3),
                ("B", "D", 4),
                ("C", "D", 3),
                ("D", "E", 1),
            ],
            &["E"],
        );

        let (_, cost) = maze.best_path("A").unwrap();
        let (paths, all_cost) = maze.all_best_paths("A");

        assert_eq!(all_cost, Some(cost));
        assert!(!paths.is_empty());
    }

    #[test]
    fn admissible_heuristic_matches_dijkstra() {
        let edges = [("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)];

        let plain = Maze::new(&edges, &["D"]);
        let guided =
            Maze::new(&edges, &["D"]).with_estimates(&[("A", 2), ("B", 1), ("C", 1), ("D", 0)]);

        assert_eq!(plain.best_path("A").unwrap(), guided.best_path("A").unwrap());

        let (mut plain_paths, plain_cost) = plain.all_best_paths("A");
        let (mut guided_paths, guided_cost) = guided.all_best_paths("A");
        plain_paths.sort();
        guided_paths.sort();

        assert_eq!(plain_paths, guided_paths);
        assert_eq!(plain_cost, guided_cost);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let maze = Maze::new(
            &[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)],
            &["D"],
        );

        let first = maze.all_best_paths("A");
        let second = maze.all_best_paths("A");
        assert_eq!(first, second);

        assert_eq!(maze.best_path("A").unwrap(), maze.best_path("A").unwrap());
    }
}

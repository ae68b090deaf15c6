use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use crate::algorithm::{self, SearchMode};
use crate::errors::{Result, SearchError};

/// Provides an interface for searching a weighted graph.
///
/// Implementors describe the graph through four hooks: neighbor
/// enumeration, edge weights, a terminal predicate, and an optional
/// heuristic. The search methods provided by this trait then walk the
/// graph best-first, always expanding the pending node with the lowest
/// estimated total cost.
///
/// With the default zero heuristic the search is Dijkstra's algorithm;
/// supplying an admissible heuristic (one which never overestimates
/// the remaining cost to any terminal) makes it A*. An inadmissible
/// heuristic voids the optimality guarantees of both search methods.
pub trait GraphSearcher {
    /// Node identity within the graph. Composite nodes (e.g. a grid
    /// cell combined with a heading) must use structural equality.
    type Node: Debug + Clone + Eq + Hash;

    /// Edge and path cost. `Default` must produce the zero cost.
    /// Negative weights are outside the correctness contract.
    type Weight: Debug + Copy + Ord + Default + Add<Output = Self::Weight>;

    /// Nodes reachable from `node` by a single edge.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Cost of the edge from `origin` to `neighbor`.
    fn edge_weight(&self, origin: &Self::Node, neighbor: &Self::Node) -> Self::Weight;

    /// Whether `node` completes a search. Multiple nodes may qualify.
    fn is_terminal(&self, node: &Self::Node) -> bool;

    /// Best guess of the remaining cost from `node` to a terminal.
    #[allow(unused_variables)]
    fn heuristic(&self, node: &Self::Node) -> Self::Weight {
        Self::Weight::default()
    }

    /// Find one minimum-cost path from `start` to a terminal node.
    ///
    /// Returns the path (start and terminal included) along with its
    /// true cost, stopping as soon as optimality is confirmed. Fails
    /// with [SearchError::NoPathFound] when the frontier empties
    /// without reaching a terminal.
    fn best_path(&self, start: Self::Node) -> Result<(Vec<Self::Node>, Self::Weight)> {
        let (mut paths, cost) = algorithm::search(self, start, SearchMode::FirstComplete);
        match (paths.pop(), cost) {
            (Some(path), Some(cost)) => Ok((path, cost)),
            _ => Err(SearchError::NoPathFound),
        }
    }

    /// Find every distinct minimum-cost path from `start` to a
    /// terminal node.
    ///
    /// Runs the frontier to exhaustion and returns all paths whose
    /// cost ties the minimum, along with that cost. When no terminal
    /// is reachable the path collection is empty and the cost is
    /// `None`; callers must check for this explicitly.
    fn all_best_paths(&self, start: Self::Node) -> (Vec<Vec<Self::Node>>, Option<Self::Weight>) {
        algorithm::search(self, start, SearchMode::Exhaustive)
    }
}

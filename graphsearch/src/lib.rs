//! Generalized best-first search over weighted graphs.
//!
//! To search a graph, implement the trait [GraphSearcher] for your
//! domain type: provide neighbor enumeration, edge weights and a
//! terminal predicate, and optionally a heuristic to turn the default
//! Dijkstra behavior into A*. The trait then provides two entry
//! points: [GraphSearcher::best_path] returns the first path confirmed
//! optimal, and [GraphSearcher::all_best_paths] enumerates every path
//! tied for the optimal cost.

mod algorithm;
mod errors;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::GraphSearcher;

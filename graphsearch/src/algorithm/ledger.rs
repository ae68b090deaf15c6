use std::collections::HashMap;
use std::hash::Hash;

/// The best true cost discovered so far for each visited node.
///
/// Nodes with no entry are treated as infinitely expensive. After a
/// tie is relaxed in exhaustive mode the ledger no longer identifies
/// a unique predecessor for a node; path identity is carried only by
/// the frontier's predecessor links.
#[derive(Debug)]
pub(crate) struct ScoreLedger<N, W> {
    scores: HashMap<N, W>,
}

impl<N, W> ScoreLedger<N, W>
where
    N: Eq + Hash,
    W: Copy,
{
    pub(crate) fn new() -> Self {
        ScoreLedger {
            scores: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, node: N, cost: W) {
        self.scores.insert(node, cost);
    }

    pub(crate) fn best(&self, node: &N) -> Option<W> {
        self.scores.get(node).copied()
    }
}

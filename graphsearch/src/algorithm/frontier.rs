use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// A single pending entry in the search frontier.
///
/// Each state links back to the state it was expanded from, forming a
/// path tree rooted at the start node. Links are never mutated after
/// creation; completed paths are copied out before the tree is
/// dropped with the frontier.
#[derive(Debug)]
pub(crate) struct SearchState<N, W> {
    priority: W,
    sequence: usize,
    pub(crate) cost: W,
    pub(crate) node: N,
    parent: Option<Rc<SearchState<N, W>>>,
}

impl<N, W> SearchState<N, W>
where
    N: Clone,
{
    /// The nodes visited from the start to this state, in travel order.
    pub(crate) fn path(&self) -> Vec<N> {
        let mut nodes = vec![self.node.clone()];
        let mut cursor = self.parent.as_deref();
        while let Some(state) = cursor {
            nodes.push(state.node.clone());
            cursor = state.parent.as_deref();
        }
        nodes.reverse();
        nodes
    }
}

impl<N, W> PartialEq for SearchState<N, W>
where
    W: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<N, W> Eq for SearchState<N, W> where W: Ord {}

impl<N, W> Ord for SearchState<N, W>
where
    W: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<N, W> PartialOrd for SearchState<N, W>
where
    W: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue of pending search states, ordered by estimated
/// total cost and then by insertion order.
///
/// The insertion counter is owned by the frontier, so sequence numbers
/// are scoped to a single search run. Ties in priority always resolve
/// to the earliest insertion, independent of [BinaryHeap]'s ordering
/// among equal elements.
#[derive(Debug)]
pub(crate) struct Frontier<N, W> {
    queue: BinaryHeap<SearchState<N, W>>,
    sequence: usize,
}

impl<N, W> Frontier<N, W>
where
    W: Ord,
{
    pub(crate) fn new() -> Self {
        Frontier {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub(crate) fn push(
        &mut self,
        node: N,
        cost: W,
        priority: W,
        parent: Option<Rc<SearchState<N, W>>>,
    ) {
        let state = SearchState {
            priority,
            sequence: self.sequence,
            cost,
            node,
            parent,
        };
        self.sequence += 1;
        self.queue.push(state);
    }

    pub(crate) fn pop(&mut self) -> Option<SearchState<N, W>> {
        self.queue.pop()
    }
}

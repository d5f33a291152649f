//! Best-first frontier and visited set.
//!
//! The frontier is a min-heap on `(f, insertion sequence)`, so nodes with equal
//! `f` come out in the order they were pushed and repeated runs on the same
//! input expand nodes in the same order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::node::NodeId;

/// The frontier ordering key: lower `f` first, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub seq: u64,
    pub node: NodeId,
}

/// Min-heap of node ids keyed by `f`.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a node; the insertion counter breaks ties on `f`.
    pub fn push(&mut self, f: u32, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierKey { f, seq, node }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the entry with the lowest `f` (oldest first on ties).
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Canonical keys of every state ever enqueued.
///
/// Keys are never removed. A state reached again later, even along a cheaper
/// path, is not re-enqueued. With unit move cost and a consistent heuristic
/// the first path to a state is already a shortest one, and the solver
/// depends on that.
#[derive(Debug)]
pub struct VisitedSet<K> {
    keys: FxHashSet<K>,
}

impl<K: Eq + Hash> VisitedSet<K> {
    pub fn new() -> Self {
        Self {
            keys: FxHashSet::default(),
        }
    }

    /// Records a key. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Eq + Hash> Default for VisitedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

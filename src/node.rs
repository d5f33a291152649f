//! Search nodes and the arena that owns them for one run.
//!
//! Parents are referenced by [`NodeId`] rather than by pointer, so the whole
//! search tree is a single `Vec` dropped when the run ends.

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered state with its search bookkeeping.
///
/// Created once, on first enqueue, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    pub state: S,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Path cost from the root (+1 per move).
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: u32,
}

impl<S, A> SearchNode<S, A> {
    /// Root node: no parent, no action, zero cost.
    pub fn root(state: S, h: u32) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            depth: 0,
            g: 0,
            h,
        }
    }

    /// Child reached from `parent` by one unit-cost action.
    pub fn child(parent_id: NodeId, parent: &Self, action: A, state: S, h: u32) -> Self {
        Self {
            state,
            parent: Some(parent_id),
            action: Some(action),
            depth: parent.depth + 1,
            g: parent.g + 1,
            h,
        }
    }

    /// `f = g + h`, the frontier ordering key.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

/// Append-only storage for every node generated during a run.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores a node and returns its id.
    pub fn push(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Looks up a node.
    ///
    /// Ids are only handed out by [`NodeArena::push`], so a lookup with an
    /// id from the same arena always succeeds.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `id` up to and including the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode<S, A>)> + '_ {
        std::iter::successors(Some(id), move |&current| self.get(current).parent)
            .map(move |current| (current, self.get(current)))
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//! Best-first (A*) search driver.
//!
//! Key properties:
//! - Frontier ordered by `(f, insertion order)` for reproducible output
//! - Visited set checked on enqueue, so each state gets exactly one node
//! - Nodes kept in an arena and linked to their parent by id
//! - Exhaustion reported as [`SearchOutcome::Unreachable`], never as an error

use std::hash::Hash;

use log::{debug, info};

use crate::frontier::{Frontier, VisitedSet};
use crate::node::{NodeArena, NodeId, SearchNode};

/// Expansions between progress log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// A state space the driver can search.
///
/// Every action costs 1. The visited set never revisits a state, which only
/// yields shortest paths when that holds and `estimate` is consistent.
pub trait SearchSpace {
    type State: Clone;
    type Action: Copy;
    /// Canonical key used for duplicate suppression.
    type Key: Eq + Hash;

    fn key(&self, state: &Self::State) -> Self::Key;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Admissible, consistent lower bound on the remaining cost.
    fn estimate(&self, state: &Self::State) -> u32;

    /// Legal actions from `state` with their successors, in a fixed order.
    fn successors(&self, state: &Self::State) -> impl Iterator<Item = (Self::Action, Self::State)>;
}

/// A shortest path found by [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A, S> {
    /// Number of moves; equals `actions.len()`.
    pub depth: u32,
    /// Actions from the initial state to the goal.
    pub actions: Vec<A>,
    /// `g + h` of each node after the root, in path order.
    pub f_values: Vec<u32>,
    /// Every state on the path, initial and goal included.
    pub path: Vec<S>,
    /// Nodes created during the run, the root included.
    pub nodes_generated: u64,
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<A, S> {
    Solved(Solution<A, S>),
    /// The frontier emptied before any goal was popped.
    Unreachable { nodes_generated: u64 },
}

impl<A, S> SearchOutcome<A, S> {
    pub fn nodes_generated(&self) -> u64 {
        match self {
            SearchOutcome::Solved(solution) => solution.nodes_generated,
            SearchOutcome::Unreachable { nodes_generated } => *nodes_generated,
        }
    }

    pub fn solution(&self) -> Option<&Solution<A, S>> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Unreachable { .. } => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<A, S>> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::Unreachable { .. } => None,
        }
    }
}

/// Runs best-first search from `initial` until a goal is popped or the
/// frontier empties.
pub fn search<P: SearchSpace>(space: &P, initial: P::State) -> SearchOutcome<P::Action, P::State> {
    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut frontier = Frontier::new();
    let mut visited: VisitedSet<P::Key> = VisitedSet::new();

    let root_h = space.estimate(&initial);
    info!("starting search, initial estimate {root_h}");

    visited.insert(space.key(&initial));
    let root = arena.push(SearchNode::root(initial, root_h));
    frontier.push(root_h, root);
    let mut nodes_generated: u64 = 1;
    let mut expanded: u64 = 0;

    while let Some(entry) = frontier.pop() {
        let current_id = entry.node;
        let current = arena.get(current_id);

        if space.is_goal(&current.state) {
            info!(
                "goal reached at depth {} after {nodes_generated} nodes ({expanded} expanded, frontier peak {})",
                current.depth,
                frontier.high_water()
            );
            return SearchOutcome::Solved(reconstruct(&arena, current_id, nodes_generated));
        }

        expanded += 1;
        if expanded % PROGRESS_INTERVAL == 0 {
            debug!(
                "expanded {expanded}, generated {nodes_generated}, frontier {}, current f {}",
                frontier.len(),
                entry.f
            );
        }

        // collect first: the arena cannot grow while `current` borrows it
        let children: Vec<SearchNode<P::State, P::Action>> = space
            .successors(&current.state)
            .filter_map(|(action, next)| {
                if !visited.insert(space.key(&next)) {
                    return None;
                }
                let h = space.estimate(&next);
                Some(SearchNode::child(current_id, current, action, next, h))
            })
            .collect();

        for child in children {
            let f = child.f();
            let child_id = arena.push(child);
            frontier.push(f, child_id);
            nodes_generated += 1;
        }
    }

    info!("frontier exhausted after {nodes_generated} nodes, goal unreachable");
    SearchOutcome::Unreachable { nodes_generated }
}

/// Follows parent links from the goal back to the root and reverses them.
fn reconstruct<S: Clone, A: Copy>(
    arena: &NodeArena<S, A>,
    goal: NodeId,
    nodes_generated: u64,
) -> Solution<A, S> {
    let mut actions = Vec::new();
    let mut f_values = Vec::new();
    let mut path = Vec::new();

    for (_, node) in arena.ancestry(goal) {
        path.push(node.state.clone());
        // the root carries no action and contributes no step
        if let Some(action) = node.action {
            actions.push(action);
            f_values.push(node.f());
        }
    }

    actions.reverse();
    f_values.reverse();
    path.reverse();

    Solution {
        depth: arena.get(goal).depth,
        actions,
        f_values,
        path,
        nodes_generated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integers on a line; each step moves by one within `0..=limit`.
    struct Line {
        limit: i32,
        goal: i32,
    }

    impl SearchSpace for Line {
        type State = i32;
        type Action = char;
        type Key = i32;

        fn key(&self, state: &i32) -> i32 {
            *state
        }

        fn is_goal(&self, state: &i32) -> bool {
            *state == self.goal
        }

        fn estimate(&self, state: &i32) -> u32 {
            // distance to the goal, clamped to the line
            state.abs_diff(self.goal.clamp(0, self.limit))
        }

        fn successors(&self, state: &i32) -> impl Iterator<Item = (char, i32)> {
            let limit = self.limit;
            [('+', *state + 1), ('-', *state - 1)]
                .into_iter()
                .filter(move |&(_, next)| (0..=limit).contains(&next))
        }
    }

    #[test]
    fn test_start_at_goal_generates_only_the_root() {
        let line = Line { limit: 5, goal: 2 };
        let solution = search(&line, 2).into_solution().unwrap();
        assert_eq!(solution.depth, 0);
        assert!(solution.actions.is_empty());
        assert!(solution.f_values.is_empty());
        assert_eq!(solution.path, vec![2]);
        assert_eq!(solution.nodes_generated, 1);
    }

    #[test]
    fn test_straight_line_path() {
        let line = Line { limit: 9, goal: 7 };
        let solution = search(&line, 3).into_solution().unwrap();
        assert_eq!(solution.depth, 4);
        assert_eq!(solution.actions, vec!['+'; 4]);
        assert_eq!(solution.f_values, vec![4, 4, 4, 4]);
        assert_eq!(solution.path, vec![3, 4, 5, 6, 7]);
        // the root plus both neighbours of 3, then one new node per step
        assert_eq!(solution.nodes_generated, 6);
    }

    #[test]
    fn test_goal_off_the_line_is_unreachable() {
        let line = Line { limit: 4, goal: 10 };
        let outcome = search(&line, 0);
        // every state on 0..=4 is generated once before the frontier empties
        assert_eq!(outcome, SearchOutcome::Unreachable { nodes_generated: 5 });
        assert_eq!(outcome.nodes_generated(), 5);
        assert!(outcome.solution().is_none());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let line = Line { limit: 20, goal: 3 };
        assert_eq!(search(&line, 17), search(&line, 17));
    }
}

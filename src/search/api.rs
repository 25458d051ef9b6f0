//! Shortcuts running a searcher with an unlimited config.

use crate::adt::Order;

use super::{
    best::{BestFirstSearcher, HillClimbSearcher},
    bfs::BfsSearcher,
    dfs::DfsSearcher,
    searcher::Searcher,
};

////////////////////////////////////////////////////////////////////////////////

/// All goal states reachable from `initial`, in breadth-first order.
pub fn bfs_all<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    initial: S,
) -> Vec<S> {
    BfsSearcher::default()
        .collect(initial, successors, goal)
        .states
}

/// The shallowest goal state reachable from `initial`.
pub fn bfs_first<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    initial: S,
) -> Option<S> {
    BfsSearcher::default().check(initial, successors, goal).state
}

/// All goal states reachable from `initial`, in depth-first order.
pub fn dfs_all<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    initial: S,
) -> Vec<S> {
    DfsSearcher::default()
        .collect(initial, successors, goal)
        .states
}

pub fn dfs_first<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    initial: S,
) -> Option<S> {
    DfsSearcher::default().check(initial, successors, goal).state
}

/// All goal states reachable from `initial`, expanding the best ranked
/// state of the whole frontier first.
pub fn bestfs_all<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    order: impl Order<S> + Clone,
    initial: S,
) -> Vec<S> {
    BestFirstSearcher::with_order(order)
        .collect(initial, successors, goal)
        .states
}

pub fn bestfs_first<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    order: impl Order<S> + Clone,
    initial: S,
) -> Option<S> {
    BestFirstSearcher::with_order(order)
        .check(initial, successors, goal)
        .state
}

/// Greedy search following the best ranked successor, without backtracking.
pub fn hill_climb<S: Clone>(
    successors: impl Fn(&S) -> Vec<S>,
    goal: impl Fn(&S) -> bool,
    order: impl Order<S> + Clone,
    initial: S,
) -> Option<S> {
    HillClimbSearcher::with_order(order)
        .check(initial, successors, goal)
        .state
}

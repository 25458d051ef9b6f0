use super::{
    control::{GoalFn, SuccessorFn},
    log::SearchLog,
};

////////////////////////////////////////////////////////////////////////////////

/// Result of a first-solution search.
#[derive(Clone, Debug)]
pub struct CheckInfo<S> {
    pub state: Option<S>,
    pub log: SearchLog,
}

/// Result of an exhaustive search. Goal states are kept in discovery order.
#[derive(Clone, Debug)]
pub struct CollectInfo<S> {
    pub states: Vec<S>,
    pub log: SearchLog,
}

////////////////////////////////////////////////////////////////////////////////

/// Search strategy over states of type `S`.
///
/// Searchers never deduplicate states: a state reachable along several
/// paths is visited once per path, and a cyclic state space without
/// pruning in `successors` is searched forever unless the config
/// limits the depth.
pub trait Searcher<S> {
    /// Searches for the first goal state reachable from `start`.
    fn check(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CheckInfo<S>;

    /// Searches for all goal states reachable from `start`.
    fn collect(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CollectInfo<S>;
}

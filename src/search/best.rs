use log::debug;

use crate::adt::{Order, PriorityQueue};

use super::{
    control::{GoalFn, SuccessorFn},
    explore::{explore, Keep, Stop},
    frontier::EntryOrder,
    searcher::{CheckInfo, CollectInfo, Searcher},
    SearchConfig,
};

////////////////////////////////////////////////////////////////////////////////

/// Best-first search.
///
/// The frontier is a priority queue ranked by `order`; the lowest ranked
/// state is expanded next. The rest of the frontier is kept, so the search
/// backtracks to earlier alternatives when a branch runs dry.
#[derive(Clone, Debug)]
pub struct BestFirstSearcher<O> {
    cfg: SearchConfig,
    order: O,
}

impl<O> BestFirstSearcher<O> {
    pub fn new(cfg: SearchConfig, order: O) -> Self {
        Self { cfg, order }
    }

    pub fn with_order(order: O) -> Self {
        Self::new(SearchConfig::unlimited(), order)
    }
}

impl<S: Clone, O: Order<S> + Clone> Searcher<S> for BestFirstSearcher<O> {
    fn check(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CheckInfo<S> {
        let (found, log) = explore(
            PriorityQueue::with_order(EntryOrder(self.order.clone())),
            Keep::Frontier,
            Stop::First,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("best-first check finished. {}", log);
        CheckInfo {
            state: found.into_iter().next(),
            log,
        }
    }

    fn collect(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CollectInfo<S> {
        let (states, log) = explore(
            PriorityQueue::with_order(EntryOrder(self.order.clone())),
            Keep::Frontier,
            Stop::Exhaust,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("best-first collect finished. {}", log);
        CollectInfo { states, log }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Hill-climbing search.
///
/// Like best-first, but after each expansion only the fresh successors
/// stay in the frontier. The search never backtracks and stops at the
/// first goal, so `collect` yields at most one state.
#[derive(Clone, Debug)]
pub struct HillClimbSearcher<O> {
    cfg: SearchConfig,
    order: O,
}

impl<O> HillClimbSearcher<O> {
    pub fn new(cfg: SearchConfig, order: O) -> Self {
        Self { cfg, order }
    }

    pub fn with_order(order: O) -> Self {
        Self::new(SearchConfig::unlimited(), order)
    }
}

impl<S: Clone, O: Order<S> + Clone> Searcher<S> for HillClimbSearcher<O> {
    fn check(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CheckInfo<S> {
        let (found, log) = explore(
            PriorityQueue::with_order(EntryOrder(self.order.clone())),
            Keep::Successors,
            Stop::First,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("hill-climbing finished. {}", log);
        CheckInfo {
            state: found.into_iter().next(),
            log,
        }
    }

    fn collect(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CollectInfo<S> {
        let CheckInfo { state, log } = self.check(start, successors, goal);
        CollectInfo {
            states: state.into_iter().collect(),
            log,
        }
    }
}

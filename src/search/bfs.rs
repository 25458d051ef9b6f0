use log::debug;

use crate::adt::Queue;

use super::{
    control::{GoalFn, SuccessorFn},
    explore::{explore, Keep, Stop},
    searcher::{CheckInfo, CollectInfo, Searcher},
    SearchConfig,
};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first search.
///
/// The frontier is a queue and successors are appended in the order
/// they are generated, so goal states are found in non-decreasing depth.
#[derive(Clone, Debug, Default)]
pub struct BfsSearcher {
    cfg: SearchConfig,
}

impl BfsSearcher {
    pub fn new(cfg: SearchConfig) -> Self {
        Self { cfg }
    }
}

impl<S: Clone> Searcher<S> for BfsSearcher {
    fn check(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CheckInfo<S> {
        let (found, log) = explore(
            Queue::empty(),
            Keep::Frontier,
            Stop::First,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("bfs check finished. {}", log);
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
            Queue::empty(),
            Keep::Frontier,
            Stop::Exhaust,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("bfs collect finished. {}", log);
        CollectInfo { states, log }
    }
}

use log::debug;

use crate::adt::Stack;

use super::{
    control::{GoalFn, SuccessorFn},
    explore::{explore, Keep, Stop},
    searcher::{CheckInfo, CollectInfo, Searcher},
    SearchConfig,
};

////////////////////////////////////////////////////////////////////////////////

/// Depth-first search.
///
/// The frontier is a stack. Successors are pushed so that the first one
/// generated is explored first. No cycle detection is performed.
#[derive(Clone, Debug, Default)]
pub struct DfsSearcher {
    cfg: SearchConfig,
}

impl DfsSearcher {
    pub fn new(cfg: SearchConfig) -> Self {
        Self { cfg }
    }
}

impl<S: Clone> Searcher<S> for DfsSearcher {
    fn check(
        &self,
        start: S,
        successors: impl SuccessorFn<S>,
        goal: impl GoalFn<S>,
    ) -> CheckInfo<S> {
        let (found, log) = explore(
            Stack::empty(),
            Keep::Frontier,
            Stop::First,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("dfs check finished. {}", log);
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
            Stack::empty(),
            Keep::Frontier,
            Stop::Exhaust,
            &self.cfg,
            start,
            successors,
            goal,
        );
        debug!("dfs collect finished. {}", log);
        CollectInfo { states, log }
    }
}

use log::trace;

use crate::adt::Container;

use super::{
    control::{GoalFn, SuccessorFn},
    frontier::Entry,
    log::SearchLog,
    SearchConfig,
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stop {
    /// Stop at the first goal.
    First,
    /// Exhaust the frontier.
    Exhaust,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Keep {
    /// Successors join the rest of the frontier.
    Frontier,
    /// Successors replace the frontier.
    Successors,
}

////////////////////////////////////////////////////////////////////////////////

/// Runs the search loop shared by all strategies.
///
/// The retrieval discipline of `empty` (stack, queue or priority queue)
/// decides the strategy.
pub(crate) fn explore<S, C>(
    empty: C,
    keep: Keep,
    stop: Stop,
    cfg: &SearchConfig,
    start: S,
    successors: impl SuccessorFn<S>,
    goal: impl GoalFn<S>,
) -> (Vec<S>, SearchLog)
where
    S: Clone,
    C: Container<Entry<S>>,
{
    let mut log = SearchLog::new();
    let mut found = Vec::new();

    let mut frontier = empty.push(Entry::root(start));
    log.observe_frontier(frontier.len());

    while let Ok((entry, rest)) = frontier.split() {
        log.visited += 1;

        // goal states are reported, not expanded
        if goal(&entry.state) {
            log.goals += 1;
            found.push(entry.state);
            if stop == Stop::First {
                break;
            }
            frontier = rest;
            continue;
        }

        let base = match keep {
            Keep::Frontier => rest,
            Keep::Successors => empty.clone(),
        };

        // check depth restriction
        if !cfg.allows_expansion(entry.depth) {
            log.depth_cuts += 1;
            frontier = base;
            continue;
        }

        // branch
        let next: Vec<Entry<S>> = successors(&entry.state)
            .into_iter()
            .map(|s| entry.child(s))
            .collect();
        log.expanded += 1;
        log.generated += next.len();
        trace!(
            "expanded state at depth {}: {} successors",
            entry.depth,
            next.len()
        );

        frontier = base.extend(next);
        log.observe_frontier(frontier.len());
    }

    (found, log)
}

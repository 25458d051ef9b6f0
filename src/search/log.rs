use std::fmt::Display;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////

/// Statistics of one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLog {
    /// States taken from the frontier.
    pub visited: usize,
    /// States whose successors were computed.
    pub expanded: usize,
    /// Successors put into the frontier.
    pub generated: usize,
    /// Goal states found.
    pub goals: usize,
    /// States not expanded because of the depth limit.
    pub depth_cuts: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

impl SearchLog {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn observe_frontier(&mut self, size: usize) {
        self.max_frontier = self.max_frontier.max(size);
    }
}

impl Display for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Visited: {}, expanded: {}, generated: {}, goals: {}, depth cuts: {}, max frontier: {}",
            self.visited,
            self.expanded,
            self.generated,
            self.goals,
            self.depth_cuts,
            self.max_frontier
        )
    }
}

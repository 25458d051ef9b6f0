use std::cmp::Ordering;

use crate::adt::Order;

////////////////////////////////////////////////////////////////////////////////

/// State waiting in the frontier, with its distance from the initial state.
#[derive(Clone, Debug)]
pub(crate) struct Entry<S> {
    pub state: S,
    pub depth: usize,
}

impl<S> Entry<S> {
    pub fn root(state: S) -> Self {
        Self { state, depth: 0 }
    }

    pub fn child(&self, state: S) -> Self {
        Self {
            state,
            depth: self.depth + 1,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Lifts an order over states to frontier entries.
#[derive(Clone)]
pub(crate) struct EntryOrder<O>(pub O);

impl<S, O: Order<S>> Order<Entry<S>> for EntryOrder<O> {
    fn compare(&self, a: &Entry<S>, b: &Entry<S>) -> Ordering {
        self.0.compare(&a.state, &b.state)
    }
}

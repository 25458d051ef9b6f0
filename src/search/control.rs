pub trait SuccessorFn<S>: Fn(&S) -> Vec<S> {}

impl<S, F> SuccessorFn<S> for F where F: Fn(&S) -> Vec<S> {}

////////////////////////////////////////////////////////////////////////////////

pub trait GoalFn<S>: Fn(&S) -> bool {}

impl<S, F> GoalFn<S> for F where F: Fn(&S) -> bool {}

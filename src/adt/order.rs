use std::cmp::Ordering;

////////////////////////////////////////////////////////////////////////////////

/// Total order over `T`, supplied to priority queues and heuristic searches.
///
/// Lesser elements are retrieved first.
pub trait Order<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

////////////////////////////////////////////////////////////////////////////////

/// Order given by `T: Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Order<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Order by a key extracted from each element, e.g. a heuristic estimate.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Order<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Order derived from a strict "less than" predicate.
///
/// Elements for which neither `a < b` nor `b < a` holds are equal.
#[derive(Debug, Clone, Copy)]
pub struct Less<F>(pub F);

impl<T, F> Order<T> for Less<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(a, b) {
            Ordering::Less
        } else if (self.0)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

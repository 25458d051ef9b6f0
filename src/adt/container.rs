use super::error::ContainerResult;

////////////////////////////////////////////////////////////////////////////////

/// Immutable container with a fixed retrieval discipline.
///
/// Every operation leaves `self` untouched and returns a new container,
/// sharing structure with the old one where possible.
pub trait Container<T>: Clone {
    /// Returns a container with `item` added.
    fn push(&self, item: T) -> Self;

    /// Returns the element that would be retrieved next.
    fn peek(&self) -> ContainerResult<&T>;

    /// Returns a container without the element that would be retrieved next.
    fn pop(&self) -> ContainerResult<Self>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Adds a batch of items so that, among them, retrieval follows
    /// the order of `items`.
    fn extend(&self, items: Vec<T>) -> Self {
        items
            .into_iter()
            .fold(self.clone(), |container, item| container.push(item))
    }

    /// Peek and pop in one step.
    fn split(&self) -> ContainerResult<(T, Self)>
    where
        T: Clone,
    {
        let next = self.peek()?.clone();
        Ok((next, self.pop()?))
    }
}

use std::fmt::Debug;

use super::{
    container::Container,
    error::{ContainerError, ContainerKind, ContainerResult},
    stack::Stack,
};

////////////////////////////////////////////////////////////////////////////////

/// Persistent first-in-first-out queue.
///
/// Kept as two stacks: `front` holds the oldest elements with the
/// oldest on top, `back` holds the newest with the newest on top.
/// `front` is empty only if the whole queue is empty.
pub struct Queue<T> {
    front: Stack<T>,
    back: Stack<T>,
}

impl<T: Clone> Queue<T> {
    pub fn empty() -> Self {
        Self {
            front: Stack::empty(),
            back: Stack::empty(),
        }
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let back: Vec<&T> = self.back.iter().collect();
        self.front.iter().chain(back.into_iter().rev())
    }

    fn balanced(front: Stack<T>, back: Stack<T>) -> Self {
        if front.is_empty() {
            Self {
                front: back.reversed(),
                back: Stack::empty(),
            }
        } else {
            Self { front, back }
        }
    }
}

impl<T: Clone> Container<T> for Queue<T> {
    fn push(&self, item: T) -> Self {
        if self.front.is_empty() {
            Self {
                front: self.front.push(item),
                back: Stack::empty(),
            }
        } else {
            Self {
                front: self.front.clone(),
                back: self.back.push(item),
            }
        }
    }

    fn peek(&self) -> ContainerResult<&T> {
        self.front
            .peek()
            .map_err(|_| ContainerError::Empty(ContainerKind::Queue))
    }

    fn pop(&self) -> ContainerResult<Self> {
        let front = self
            .front
            .pop()
            .map_err(|_| ContainerError::Empty(ContainerKind::Queue))?;
        Ok(Self::balanced(front, self.back.clone()))
    }

    fn is_empty(&self) -> bool {
        self.front.is_empty()
    }

    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: Clone> Default for Queue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + Eq> Eq for Queue<T> {}

impl<T: Clone + Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> FromIterator<T> for Queue<T> {
    /// The first element of the iterator ends at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |queue, item| queue.push(item))
    }
}

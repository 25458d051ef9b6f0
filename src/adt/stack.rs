use std::{fmt::Debug, rc::Rc};

use super::{
    container::Container,
    error::{ContainerError, ContainerKind, ContainerResult},
};

////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
    item: T,
    next: Link<T>,
}

type Link<T> = Option<Rc<Node<T>>>;

////////////////////////////////////////////////////////////////////////////////

/// Persistent last-in-first-out stack.
///
/// Pushing and popping share the tail with the original stack,
/// so both are O(1) and never copy elements.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns a stack holding the same elements in the opposite order.
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .fold(Self::empty(), |stack, item| stack.push(item.clone()))
    }
}

impl<T> Container<T> for Stack<T> {
    fn push(&self, item: T) -> Self {
        let node = Node {
            item,
            next: self.head.clone(),
        };
        Self {
            head: Some(Rc::new(node)),
            len: self.len + 1,
        }
    }

    fn peek(&self) -> ContainerResult<&T> {
        self.head
            .as_ref()
            .map(|node| &node.item)
            .ok_or(ContainerError::Empty(ContainerKind::Stack))
    }

    fn pop(&self) -> ContainerResult<Self> {
        let node = self
            .head
            .as_ref()
            .ok_or(ContainerError::Empty(ContainerKind::Stack))?;
        Ok(Self {
            head: node.next.clone(),
            len: self.len - 1,
        })
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    // the first item of the batch must end on top
    fn extend(&self, items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(self.clone(), |stack, item| stack.push(item))
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // unlink iteratively, stopping at the first node shared with another stack
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// The last element of the iterator ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |stack, item| stack.push(item))
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

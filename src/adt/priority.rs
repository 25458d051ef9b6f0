use std::{cmp::Ordering, fmt::Debug, rc::Rc};

use super::{
    container::Container,
    error::{ContainerError, ContainerKind, ContainerResult},
    order::{Natural, Order},
};

////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
    rank: usize,
    seq: u64,
    item: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Rc<Node<T>>>;

fn rank<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.rank)
}

// keeps the leftist property: rank(left) >= rank(right)
fn make<T>(seq: u64, item: T, a: Link<T>, b: Link<T>) -> Link<T> {
    let (left, right) = if rank(&a) >= rank(&b) { (a, b) } else { (b, a) };
    Some(Rc::new(Node {
        rank: rank(&right) + 1,
        seq,
        item,
        left,
        right,
    }))
}

////////////////////////////////////////////////////////////////////////////////

/// Persistent priority queue yielding its minimum element first.
///
/// Implemented as a leftist heap. Elements ranked equal by the order
/// are retrieved in insertion order.
pub struct PriorityQueue<T, O = Natural> {
    root: Link<T>,
    len: usize,
    next_seq: u64,
    order: O,
}

impl<T, O: Default> PriorityQueue<T, O> {
    pub fn empty() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, O> PriorityQueue<T, O> {
    pub fn with_order(order: O) -> Self {
        Self {
            root: None,
            len: 0,
            next_seq: 0,
            order,
        }
    }

    pub fn order(&self) -> &O {
        &self.order
    }
}

impl<T: Clone, O: Order<T> + Clone> PriorityQueue<T, O> {
    /// Elements in retrieval order.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len);
        let mut queue = self.clone();
        while let Ok((item, rest)) = queue.split() {
            result.push(item);
            queue = rest;
        }
        result
    }

    fn precedes(&self, a: &Node<T>, b: &Node<T>) -> bool {
        self.order
            .compare(&a.item, &b.item)
            .then(a.seq.cmp(&b.seq))
            != Ordering::Greater
    }

    fn merge(&self, a: Link<T>, b: Link<T>) -> Link<T> {
        match (a, b) {
            (None, link) | (link, None) => link,
            (Some(a), Some(b)) => {
                let (top, other) = if self.precedes(&a, &b) { (a, b) } else { (b, a) };
                let right = self.merge(top.right.clone(), Some(other));
                make(top.seq, top.item.clone(), top.left.clone(), right)
            }
        }
    }
}

impl<T: Clone, O: Order<T> + Clone> Container<T> for PriorityQueue<T, O> {
    fn push(&self, item: T) -> Self {
        let single = make(self.next_seq, item, None, None);
        Self {
            root: self.merge(self.root.clone(), single),
            len: self.len + 1,
            next_seq: self.next_seq + 1,
            order: self.order.clone(),
        }
    }

    fn peek(&self) -> ContainerResult<&T> {
        self.root
            .as_ref()
            .map(|node| &node.item)
            .ok_or(ContainerError::Empty(ContainerKind::PriorityQueue))
    }

    fn pop(&self) -> ContainerResult<Self> {
        let node = self
            .root
            .as_ref()
            .ok_or(ContainerError::Empty(ContainerKind::PriorityQueue))?;
        Ok(Self {
            root: self.merge(node.left.clone(), node.right.clone()),
            len: self.len - 1,
            next_seq: self.next_seq,
            order: self.order.clone(),
        })
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T, O: Clone> Clone for PriorityQueue<T, O> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            next_seq: self.next_seq,
            order: self.order.clone(),
        }
    }
}

impl<T, O: Default> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, O> Drop for PriorityQueue<T, O> {
    fn drop(&mut self) {
        let mut pending: Vec<Rc<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}

impl<T: Clone + PartialEq, O: Order<T> + Clone> PartialEq for PriorityQueue<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.to_sorted_vec() == other.to_sorted_vec()
    }
}

impl<T: Clone + Debug, O: Order<T> + Clone> Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.to_sorted_vec()).finish()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |queue, item| queue.push(item))
    }
}

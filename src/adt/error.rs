use std::fmt::Display;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Kind of container, used to report which one failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Stack,
    Queue,
    PriorityQueue,
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Stack => write!(f, "stack"),
            ContainerKind::Queue => write!(f, "queue"),
            ContainerKind::PriorityQueue => write!(f, "priority queue"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents container error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// Requested the next element of an empty container.
    #[error("{0} is empty")]
    Empty(ContainerKind),
}

////////////////////////////////////////////////////////////////////////////////

pub type ContainerResult<T> = Result<T, ContainerError>;

mod container;
mod error;
mod order;
mod priority;
mod queue;
mod stack;

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;

pub use container::Container;
pub use error::{ContainerError, ContainerKind, ContainerResult};
pub use order::{ByKey, Less, Natural, Order};
pub use priority::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;

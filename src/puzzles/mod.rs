//! Puzzles solved by state-space search.
//!
//! Each module defines a state, its successors and a goal test, and
//! solves the puzzle with one of the crate's searchers. Pruning specific
//! to a puzzle lives in its successor function.

pub mod calendar;
pub mod domino;
pub mod eight;
pub mod farmer;
pub mod jugs;
pub mod knapsack;
pub mod mst;
pub mod queens;

//! Water jugs: measure an exact amount with two unmarked jugs.
//!
//! Jugs can be filled from the tap, emptied, or poured into each other
//! until the source is empty or the target is full.

use log::debug;

use crate::{bfs_all, bfs_first, Trace};

////////////////////////////////////////////////////////////////////////////////

/// Contents of the first and the second jug.
pub type Jugs = (u32, u32);

/// States visited so far, oldest first.
pub type Path = Vec<Jugs>;

/// Capacities of the two jugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    pub a: u32,
    pub b: u32,
}

impl Capacity {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// States reachable with one action, in a fixed order: fill, empty,
    /// pour until full, pour until empty.
    pub fn moves(&self, (x, y): Jugs) -> Vec<Jugs> {
        let (a, b) = (self.a, self.b);
        // wide enough that the sum of two full jugs never overflows
        let total = u64::from(x) + u64::from(y);
        let mut moves = Vec::new();
        if x < a {
            moves.push((a, y));
        }
        if y < b {
            moves.push((x, b));
        }
        if x > 0 {
            moves.push((0, y));
        }
        if y > 0 {
            moves.push((x, 0));
        }
        if x < a && y > 0 && total > u64::from(a) {
            moves.push((a, y - (a - x)));
        }
        if x > 0 && y < b && total > u64::from(b) {
            moves.push((x - (b - y), b));
        }
        if y > 0 && total <= u64::from(a) {
            moves.push((x + y, 0));
        }
        if x > 0 && total <= u64::from(b) {
            moves.push((0, x + y));
        }
        moves
    }

    pub fn successors(&self, path: &Path) -> Vec<Path> {
        let Some(&last) = path.last() else {
            return Vec::new();
        };
        self.moves(last)
            .into_iter()
            .filter(|jugs| !path.contains(jugs))
            .map(|jugs| {
                let mut next = path.clone();
                next.push(jugs);
                next
            })
            .collect()
    }
}

pub fn initial() -> Path {
    vec![(0, 0)]
}

/// The first jug holds exactly `target`.
pub fn is_goal(target: u32, path: &Path) -> bool {
    path.last().is_some_and(|&(x, _)| x == target)
}

/// A shortest sequence of actions leaving `target` in the first jug.
pub fn first_solution(a: u32, b: u32, target: u32) -> Option<Path> {
    let capacity = Capacity::new(a, b);
    let found = bfs_first(
        |path: &Path| capacity.successors(path),
        |path: &Path| is_goal(target, path),
        initial(),
    );
    if let Some(path) = &found {
        debug!("jugs {a}/{b} reach {target}:\n{}", Trace::new(path));
    }
    found
}

/// Every sequence of actions without repeated states, shortest first.
pub fn solutions(a: u32, b: u32, target: u32) -> Vec<Path> {
    let capacity = Capacity::new(a, b);
    bfs_all(
        |path: &Path| capacity.successors(path),
        |path: &Path| is_goal(target, path),
        initial(),
    )
}

////////////////////////////////////////////////////////////////////////////////

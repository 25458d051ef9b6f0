//! Farmer, wolf, goat and cabbage crossing a river.
//!
//! The boat carries the farmer and at most one passenger. The wolf may
//! not be left alone with the goat, nor the goat with the cabbage.

use log::debug;

use crate::{bfs_first, dfs_all, Trace};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    pub fn opposite(self) -> Self {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub farmer: Bank,
    pub wolf: Bank,
    pub goat: Bank,
    pub cabbage: Bank,
}

impl Position {
    pub const START: Position = Position::all(Bank::Left);
    pub const GOAL: Position = Position::all(Bank::Right);

    const fn all(bank: Bank) -> Self {
        Self {
            farmer: bank,
            wolf: bank,
            goat: bank,
            cabbage: bank,
        }
    }

    pub fn is_safe(&self) -> bool {
        let wolf_eats_goat = self.wolf == self.goat && self.farmer != self.goat;
        let goat_eats_cabbage = self.goat == self.cabbage && self.farmer != self.goat;
        !wolf_eats_goat && !goat_eats_cabbage
    }

    /// Safe positions reachable with one crossing: the farmer alone,
    /// then with the wolf, the goat or the cabbage.
    pub fn moves(&self) -> Vec<Position> {
        let side = self.farmer;
        let across = side.opposite();
        let alone = Position {
            farmer: across,
            ..*self
        };
        let mut moves = vec![alone];
        if self.wolf == side {
            moves.push(Position {
                wolf: across,
                ..alone
            });
        }
        if self.goat == side {
            moves.push(Position {
                goat: across,
                ..alone
            });
        }
        if self.cabbage == side {
            moves.push(Position {
                cabbage: across,
                ..alone
            });
        }
        moves.retain(Position::is_safe);
        moves
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Positions visited so far, oldest first.
pub type Path = Vec<Position>;

pub fn initial() -> Path {
    vec![Position::START]
}

/// Extends the path by one crossing, never returning to a position
/// already on the path.
pub fn successors(path: &Path) -> Vec<Path> {
    let Some(last) = path.last() else {
        return Vec::new();
    };
    last.moves()
        .into_iter()
        .filter(|p| !path.contains(p))
        .map(|p| {
            let mut next = path.clone();
            next.push(p);
            next
        })
        .collect()
}

pub fn is_goal(path: &Path) -> bool {
    path.last() == Some(&Position::GOAL)
}

/// Every crossing plan without repeated positions.
pub fn solutions() -> Vec<Path> {
    let found = dfs_all(successors, is_goal, initial());
    for path in found.iter() {
        debug!("farmer crossing in {} moves:\n{}", path.len() - 1, Trace::new(path));
    }
    found
}

/// A crossing plan with the fewest moves.
pub fn shortest() -> Option<Path> {
    bfs_first(successors, is_goal, initial())
}

////////////////////////////////////////////////////////////////////////////////

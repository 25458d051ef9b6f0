//! The 8-puzzle: slide tiles on a 3×3 board into the goal arrangement.

use std::fmt::{Debug, Display};

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{bestfs_first, hill_climb, ByKey, Trace};

////////////////////////////////////////////////////////////////////////////////

const SIDE: usize = 3;

/// Tiles in row-major order, `0` is the blank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board(pub [u8; 9]);

impl Board {
    /// Tiles around the blank in the center, clockwise.
    pub const GOAL: Board = Board([1, 2, 3, 8, 0, 4, 7, 6, 5]);

    /// A board holding each of the tiles `0..=8` exactly once.
    pub fn new(tiles: [u8; 9]) -> Option<Board> {
        let board = Board(tiles);
        board.is_well_formed().then_some(board)
    }

    pub fn is_well_formed(&self) -> bool {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted == [0, 1, 2, 3, 4, 5, 6, 7, 8]
    }

    fn blank(&self) -> usize {
        self.0.iter().position(|&t| t == 0).unwrap_or(0)
    }

    fn position_of(&self, tile: u8) -> usize {
        self.0.iter().position(|&t| t == tile).unwrap_or(0)
    }

    /// Boards reachable by sliding one tile into the blank.
    ///
    /// The blank moves up, down, left, right, in that order.
    pub fn moves(&self) -> Vec<Board> {
        let blank = self.blank();
        let (row, col) = (blank / SIDE, blank % SIDE);
        let mut targets = Vec::with_capacity(4);
        if row > 0 {
            targets.push(blank - SIDE);
        }
        if row + 1 < SIDE {
            targets.push(blank + SIDE);
        }
        if col > 0 {
            targets.push(blank - 1);
        }
        if col + 1 < SIDE {
            targets.push(blank + 1);
        }
        targets
            .into_iter()
            .map(|t| {
                let mut next = *self;
                next.0.swap(blank, t);
                next
            })
            .collect()
    }

    /// Sum over tiles of the Manhattan distance to their goal square.
    pub fn manhattan(&self) -> usize {
        (1..=8u8)
            .map(|tile| {
                let (a, b) = (self.position_of(tile), Self::GOAL.position_of(tile));
                (a / SIDE).abs_diff(b / SIDE) + (a % SIDE).abs_diff(b % SIDE)
            })
            .sum()
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|&b| a > b).count())
            .sum()
    }

    /// Whether the goal can be reached at all. On a board of odd side
    /// a slide never changes the parity of inversions. Malformed boards
    /// are never solvable.
    pub fn is_solvable(&self) -> bool {
        self.is_well_formed() && self.inversions() % 2 == Self::GOAL.inversions() % 2
    }

    /// The goal board after `moves` random slides, never undoing the previous one.
    pub fn scramble(moves: usize, rng: &mut impl Rng) -> Board {
        let mut board = Self::GOAL;
        let mut previous = None;
        for _ in 0..moves {
            let options: Vec<Board> = board
                .moves()
                .into_iter()
                .filter(|b| Some(*b) != previous)
                .collect();
            previous = Some(board);
            board = options[rng.random_range(0..options.len())];
        }
        board
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.0.chunks(SIDE) {
            let line: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { " ".to_string() } else { t.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .0
            .chunks(SIDE)
            .map(|row| row.iter().map(|t| t.to_string()).collect())
            .collect();
        write!(f, "{}", rows.join("/"))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Boards visited so far, oldest first.
pub type Path = Vec<Board>;

pub fn successors(path: &Path) -> Vec<Path> {
    let Some(last) = path.last() else {
        return Vec::new();
    };
    last.moves()
        .into_iter()
        .filter(|b| !path.contains(b))
        .map(|b| {
            let mut next = path.clone();
            next.push(b);
            next
        })
        .collect()
}

pub fn is_goal(path: &Path) -> bool {
    path.last() == Some(&Board::GOAL)
}

fn heuristic(path: &Path) -> usize {
    path.last().map_or(usize::MAX, Board::manhattan)
}

/// Greedy best-first search on the Manhattan distance.
///
/// Unsolvable boards are rejected up front instead of exhausting the
/// 181440 reachable arrangements.
pub fn solve_best_first(board: Board) -> Option<Path> {
    if !board.is_solvable() {
        return None;
    }
    let found = bestfs_first(successors, is_goal, ByKey(heuristic), vec![board]);
    if let Some(path) = &found {
        debug!("8-puzzle solved in {} moves:\n{}", path.len() - 1, Trace::new(path));
    }
    found
}

/// Hill-climbing on the Manhattan distance. May get stuck and return `None`
/// even for solvable boards.
pub fn solve_hill_climbing(board: Board) -> Option<Path> {
    if !board.is_solvable() {
        return None;
    }
    hill_climb(successors, is_goal, ByKey(heuristic), vec![board])
}

////////////////////////////////////////////////////////////////////////////////

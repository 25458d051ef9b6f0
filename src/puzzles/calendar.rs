//! Round-robin calendar: every player meets every other player once,
//! one game per player per day.

use log::debug;

use crate::{dfs_all, dfs_first};

////////////////////////////////////////////////////////////////////////////////

/// `table[p][d]` is the opponent of player `p` on day `d`.
pub type Table = Vec<Vec<usize>>;

/// A partially filled calendar for `n` players over `n - 1` days.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calendar {
    cells: Vec<Vec<Option<usize>>>,
}

impl Calendar {
    pub fn new(n: usize) -> Self {
        Self {
            cells: vec![vec![None; n.saturating_sub(1)]; n],
        }
    }

    pub fn players(&self) -> usize {
        self.cells.len()
    }

    /// First empty cell in row-major order.
    fn first_empty(&self) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(p, row)| {
            row.iter()
                .position(|cell| cell.is_none())
                .map(|d| (p, d))
        })
    }

    fn has_met(&self, p: usize, q: usize) -> bool {
        self.cells[p].contains(&Some(q))
    }

    /// Calendars with the first empty cell filled. Each game fills two
    /// cells at once, so opponents who already play that day are skipped.
    pub fn successors(&self) -> Vec<Calendar> {
        let Some((p, d)) = self.first_empty() else {
            return Vec::new();
        };
        (0..self.players())
            .filter(|&q| q != p && self.cells[q][d].is_none() && !self.has_met(p, q))
            .map(|q| {
                let mut next = self.clone();
                next.cells[p][d] = Some(q);
                next.cells[q][d] = Some(p);
                next
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    pub fn table(&self) -> Table {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(0)).collect())
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub fn schedules(n: usize) -> Vec<Table> {
    let found = dfs_all(Calendar::successors, Calendar::is_complete, Calendar::new(n));
    debug!("calendar for {n} players: {} schedules", found.len());
    found.iter().map(Calendar::table).collect()
}

pub fn schedule(n: usize) -> Option<Table> {
    dfs_first(Calendar::successors, Calendar::is_complete, Calendar::new(n)).map(|c| c.table())
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rstest::rstest;

    use super::{schedule, schedules, Table};

    fn check(table: &Table) {
        let n = table.len();
        for (p, row) in table.iter().enumerate() {
            assert_eq!(row.len(), n - 1);
            let opponents: BTreeSet<usize> = row.iter().copied().collect();
            let expected: BTreeSet<usize> = (0..n).filter(|&q| q != p).collect();
            assert_eq!(opponents, expected);
            for (d, &q) in row.iter().enumerate() {
                assert_eq!(table[q][d], p);
            }
        }
    }

    #[test]
    fn two_players() {
        assert_eq!(schedules(2), vec![vec![vec![1], vec![0]]]);
    }

    #[test]
    fn odd_number_of_players() {
        assert!(schedules(3).is_empty());
        assert_eq!(schedule(5), None);
    }

    #[test]
    fn four_players() {
        let all = schedules(4);
        // the three pairings of four players, in any order of days
        assert_eq!(all.len(), 6);
        all.iter().for_each(check);
        assert_eq!(
            all[0],
            vec![vec![1, 2, 3], vec![0, 3, 2], vec![3, 0, 1], vec![2, 1, 0]]
        );
    }

    #[rstest]
    fn valid_first_schedule(#[values(2, 4, 6, 8)] n: usize) {
        let table = schedule(n).unwrap();
        check(&table);
    }
}

//! N queens on an N×N board, none attacking another.

use crate::{bfs_all, dfs_all, dfs_first};

////////////////////////////////////////////////////////////////////////////////

/// Queens placed column by column.
///
/// `rows[c]` is the row, counted from 1, of the queen in column `c + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub n: usize,
    pub rows: Vec<usize>,
}

impl Placement {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            rows: Vec::with_capacity(n),
        }
    }

    /// Whether a queen in `row` of the next column is safe from all placed queens.
    pub fn accepts(&self, row: usize) -> bool {
        let col = self.rows.len();
        self.rows
            .iter()
            .enumerate()
            .all(|(c, &r)| r != row && r.abs_diff(row) != col - c)
    }

    /// Placements with one more queen. Attacked squares are pruned here
    /// instead of filtering complete boards later.
    pub fn successors(&self) -> Vec<Placement> {
        if self.is_complete() {
            return Vec::new();
        }
        (1..=self.n)
            .filter(|&row| self.accepts(row))
            .map(|row| {
                let mut next = self.clone();
                next.rows.push(row);
                next
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.rows.len() == self.n
    }
}

////////////////////////////////////////////////////////////////////////////////

/// All solutions in lexicographic order.
pub fn solutions(n: usize) -> Vec<Vec<usize>> {
    dfs_all(Placement::successors, Placement::is_complete, Placement::new(n))
        .into_iter()
        .map(|p| p.rows)
        .collect()
}

pub fn solutions_bfs(n: usize) -> Vec<Vec<usize>> {
    bfs_all(Placement::successors, Placement::is_complete, Placement::new(n))
        .into_iter()
        .map(|p| p.rows)
        .collect()
}

pub fn first_solution(n: usize) -> Option<Vec<usize>> {
    dfs_first(Placement::successors, Placement::is_complete, Placement::new(n)).map(|p| p.rows)
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{first_solution, solutions, solutions_bfs, Placement};

    #[rstest]
    #[case(1, 1)]
    #[case(2, 0)]
    #[case(3, 0)]
    #[case(4, 2)]
    #[case(5, 10)]
    #[case(6, 4)]
    #[case(8, 92)]
    fn number_of_solutions(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(solutions(n).len(), expected);
    }

    #[test]
    fn four_queens_bfs() {
        let found = solutions_bfs(4);
        assert_eq!(found, vec![vec![2, 4, 1, 3], vec![3, 1, 4, 2]]);
    }

    #[test]
    fn bfs_and_dfs_agree() {
        let mut bfs = solutions_bfs(6);
        let mut dfs = solutions(6);
        bfs.sort();
        dfs.sort();
        assert_eq!(bfs, dfs);
    }

    #[test]
    fn first_of_eight() {
        assert_eq!(first_solution(8), Some(vec![1, 5, 8, 6, 3, 7, 2, 4]));
        assert_eq!(first_solution(2), None);
    }

    #[test]
    fn diagonal_attack_rejected() {
        let p = Placement {
            n: 4,
            rows: vec![2],
        };
        assert!(!p.accepts(1));
        assert!(!p.accepts(2));
        assert!(!p.accepts(3));
        assert!(p.accepts(4));
    }

    #[test]
    fn empty_board() {
        assert_eq!(solutions(0), vec![Vec::<usize>::new()]);
    }
}

//! Domino chains: line up every tile so that touching ends match.

use crate::{dfs_all, dfs_first};

////////////////////////////////////////////////////////////////////////////////

pub type Tile = (u8, u8);

/// Tiles laid so far and the ones still in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    pub laid: Vec<Tile>,
    pub hand: Vec<Tile>,
}

impl Chain {
    pub fn new(tiles: &[Tile]) -> Self {
        Self {
            laid: Vec::new(),
            hand: tiles.to_vec(),
        }
    }

    /// Chains with one more tile from the hand, turned if needed
    /// so that it matches the free end.
    pub fn successors(&self) -> Vec<Chain> {
        let end = self.laid.last().map(|&(_, b)| b);
        let mut next = Vec::new();
        for (i, &(a, b)) in self.hand.iter().enumerate() {
            let mut orientations = vec![(a, b)];
            if a != b {
                orientations.push((b, a));
            }
            for tile in orientations {
                if end.map_or(true, |e| e == tile.0) {
                    next.push(self.lay(i, tile));
                }
            }
        }
        next
    }

    pub fn is_complete(&self) -> bool {
        self.hand.is_empty()
    }

    fn lay(&self, i: usize, tile: Tile) -> Chain {
        let mut chain = self.clone();
        chain.hand.remove(i);
        chain.laid.push(tile);
        chain
    }
}

////////////////////////////////////////////////////////////////////////////////

pub fn chains(tiles: &[Tile]) -> Vec<Vec<Tile>> {
    dfs_all(Chain::successors, Chain::is_complete, Chain::new(tiles))
        .into_iter()
        .map(|c| c.laid)
        .collect()
}

pub fn chain(tiles: &[Tile]) -> Option<Vec<Tile>> {
    dfs_first(Chain::successors, Chain::is_complete, Chain::new(tiles)).map(|c| c.laid)
}

////////////////////////////////////////////////////////////////////////////////

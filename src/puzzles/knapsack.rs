//! 0/1 knapsack: choose items of maximum total value within a weight limit.

use std::cmp::Reverse;

use log::debug;

use crate::{dfs_all, hill_climb, ByKey};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Self { weight, value }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// A partial choice of items.
///
/// `chosen` is sorted. Exhaustive search takes items in index order,
/// so `next` is the first index it still considers and every load is
/// generated once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Load {
    pub chosen: Vec<usize>,
    pub weight: u32,
    pub value: u32,
    next: usize,
}

////////////////////////////////////////////////////////////////////////////////

pub struct Knapsack<'a> {
    items: &'a [Item],
    capacity: u32,
}

impl<'a> Knapsack<'a> {
    pub fn new(items: &'a [Item], capacity: u32) -> Self {
        Self { items, capacity }
    }

    fn fits(&self, load: &Load, i: usize) -> bool {
        load.weight + self.items[i].weight <= self.capacity
    }

    fn with(&self, load: &Load, i: usize) -> Load {
        let item = self.items[i];
        let mut chosen = load.chosen.clone();
        let at = chosen.partition_point(|&c| c < i);
        chosen.insert(at, i);
        Load {
            chosen,
            weight: load.weight + item.weight,
            value: load.value + item.value,
            next: i + 1,
        }
    }

    /// Loads with one more item that still fits, taken from the items
    /// after the last one added.
    pub fn successors(&self, load: &Load) -> Vec<Load> {
        (load.next..self.items.len())
            .filter(|&i| self.fits(load, i))
            .map(|i| self.with(load, i))
            .collect()
    }

    /// Loads with any one more unchosen item that still fits.
    pub fn additions(&self, load: &Load) -> Vec<Load> {
        (0..self.items.len())
            .filter(|i| !load.chosen.contains(i))
            .filter(|&i| self.fits(load, i))
            .map(|i| self.with(load, i))
            .collect()
    }

    /// A load is final when no unchosen item fits.
    pub fn is_full(&self, load: &Load) -> bool {
        (0..self.items.len())
            .filter(|i| !load.chosen.contains(i))
            .all(|i| !self.fits(load, i))
    }
}

////////////////////////////////////////////////////////////////////////////////

/// The most valuable load, found by enumerating all maximal loads.
/// Among loads of equal value the first one found wins.
pub fn best(items: &[Item], capacity: u32) -> Load {
    let knapsack = Knapsack::new(items, capacity);
    let loads = dfs_all(
        |load: &Load| knapsack.successors(load),
        |load: &Load| knapsack.is_full(load),
        Load::default(),
    );
    debug!("knapsack: {} maximal loads", loads.len());
    loads
        .into_iter()
        .reduce(|best, load| if load.value > best.value { load } else { best })
        .unwrap_or_default()
}

/// Greedy load always adding the item that gives the highest value.
pub fn greedy(items: &[Item], capacity: u32) -> Load {
    let knapsack = Knapsack::new(items, capacity);
    hill_climb(
        |load: &Load| knapsack.additions(load),
        |load: &Load| knapsack.is_full(load),
        ByKey(|load: &Load| Reverse(load.value)),
        Load::default(),
    )
    .unwrap_or_default()
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{best, greedy, Item, Knapsack, Load};

    fn items() -> Vec<Item> {
        vec![
            Item::new(2, 3),
            Item::new(3, 4),
            Item::new(4, 5),
            Item::new(5, 6),
        ]
    }

    #[test]
    fn best_load() {
        let load = best(&items(), 5);
        assert_eq!(load.chosen, vec![0, 1]);
        assert_eq!((load.weight, load.value), (5, 7));
    }

    #[test]
    fn greedy_is_worse_here() {
        let load = greedy(&items(), 5);
        assert_eq!(load.chosen, vec![3]);
        assert_eq!(load.value, 6);
        assert!(load.value < best(&items(), 5).value);
    }

    #[test]
    fn nothing_fits() {
        let load = best(&items(), 1);
        assert_eq!(load, Load::default());
        assert_eq!(greedy(&items(), 1), Load::default());
    }

    #[test]
    fn everything_fits() {
        let load = best(&items(), 100);
        assert_eq!(load.chosen, vec![0, 1, 2, 3]);
        assert_eq!(load.value, 18);
    }

    #[test]
    fn full_loads() {
        let items = items();
        let knapsack = Knapsack::new(&items, 5);
        let start = Load::default();
        assert!(!knapsack.is_full(&start));
        let next = knapsack.successors(&start);
        assert_eq!(next.len(), 4);
        // item 0 leaves room only for item 1
        assert_eq!(knapsack.successors(&next[0]).len(), 1);
        assert!(knapsack.is_full(&next[3]));
        // item 1 alone still leaves room for item 0
        assert!(!knapsack.is_full(&next[1]));
        assert!(knapsack.successors(&next[1]).is_empty());
    }

    #[test]
    fn greedy_fills_earlier_items() {
        let items = items();
        let load = greedy(&items, 7);
        assert_eq!(load.chosen, vec![0, 3]);
        assert_eq!((load.weight, load.value), (7, 9));
        assert!(Knapsack::new(&items, 7).is_full(&load));
        assert_eq!(load.value, best(&items, 7).value);
    }

    #[rstest]
    fn greedy_loads_are_full(#[values(0, 3, 6, 8, 9, 11, 14, 20)] capacity: u32) {
        let items = items();
        let knapsack = Knapsack::new(&items, capacity);
        let load = greedy(&items, capacity);
        assert!(knapsack.is_full(&load));
        assert!(load.weight <= capacity);
        assert!(load.value <= best(&items, capacity).value);
    }
}

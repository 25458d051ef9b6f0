use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

use crate::adt::{ByKey, Container, ContainerError, ContainerKind, Less, PriorityQueue};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn minimum_is_peeked() {
    let q: PriorityQueue<i32> = [5, 1, 4, 2, 3].into_iter().collect();
    assert_eq!(q.peek(), Ok(&1));
    assert_eq!(q.to_sorted_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn empty_priority_queue_fails() {
    let q: PriorityQueue<i32> = PriorityQueue::empty();
    assert!(q.is_empty());
    assert_eq!(
        q.peek(),
        Err(ContainerError::Empty(ContainerKind::PriorityQueue))
    );
    assert_eq!(
        q.pop().unwrap_err().to_string(),
        "priority queue is empty"
    );
}

#[test]
fn ties_come_out_in_insertion_order() {
    let q = PriorityQueue::with_order(ByKey(|p: &(u32, char)| p.0))
        .push((2, 'a'))
        .push((1, 'b'))
        .push((2, 'c'))
        .push((1, 'd'))
        .push((2, 'e'));
    let order: String = q.to_sorted_vec().into_iter().map(|(_, c)| c).collect();
    assert_eq!(order, "bdace");
}

#[test]
fn less_than_order() {
    // longest string first
    let q = PriorityQueue::with_order(Less(|a: &String, b: &String| a.len() > b.len()))
        .extend(vec!["ab".to_string(), "abcd".to_string(), "a".to_string()]);
    assert_eq!(q.peek().map(String::as_str), Ok("abcd"));
}

#[test]
fn pop_leaves_original_untouched() {
    let q: PriorityQueue<i32> = [3, 1, 2].into_iter().collect();
    let popped = q.pop().unwrap();
    assert_eq!(q.len(), 3);
    assert_eq!(q.peek(), Ok(&1));
    assert_eq!(popped.peek(), Ok(&2));
    assert_eq!(popped, [2, 3].into_iter().collect::<PriorityQueue<i32>>());
}

#[rstest]
fn stress_vs_sort(#[values(1, 2, 3, 123, 321)] seed: u64, #[values(1, 10, 500)] n: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut q: PriorityQueue<i64> = PriorityQueue::empty();
    let mut expected = Vec::new();
    let mut retrieved = Vec::new();
    for _ in 0..n {
        let x = rng.random_range(-100..100);
        q = q.push(x);
        expected.push(x);
        if rng.random_bool(0.3) {
            let (item, rest) = q.split().unwrap();
            retrieved.push(item);
            q = rest;
        }
    }
    retrieved.extend(q.to_sorted_vec());
    assert_eq!(retrieved.len(), expected.len());

    // every element retrieved is the minimum of what was present at that time,
    // so the multisets agree
    retrieved.sort();
    expected.sort();
    assert_eq!(retrieved, expected);
}

#[test]
fn long_heap_drops() {
    let q: PriorityQueue<u32> = (0..200_000).rev().collect();
    assert_eq!(q.peek(), Ok(&0));
    drop(q);
}

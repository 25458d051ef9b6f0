use crate::adt::{Container, ContainerError, ContainerKind, Queue};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn first_pushed_is_retrieved_first() {
    let q = Queue::empty().push('y').push('x');
    assert_eq!(q.peek(), Ok(&'y'));
    assert_eq!(q.pop().unwrap(), Queue::empty().push('x'));
}

#[test]
fn empty_queue_fails() {
    let q: Queue<i32> = Queue::empty();
    assert!(q.is_empty());
    assert_eq!(q.peek(), Err(ContainerError::Empty(ContainerKind::Queue)));
    assert_eq!(
        q.pop().unwrap_err(),
        ContainerError::Empty(ContainerKind::Queue)
    );
}

#[test]
fn interleaved_push_pop() {
    let mut q = Queue::empty();
    let mut retrieved = Vec::new();
    for i in 0..10 {
        q = q.push(i);
        if i % 3 == 2 {
            let (item, rest) = q.split().unwrap();
            retrieved.push(item);
            q = rest;
        }
    }
    while let Ok((item, rest)) = q.split() {
        retrieved.push(item);
        q = rest;
    }
    assert_eq!(retrieved, (0..10).collect::<Vec<_>>());
}

#[test]
fn versions_are_independent() {
    let base: Queue<i32> = (1..=3).collect();
    let popped = base.pop().unwrap();
    let pushed = base.push(4);
    assert_eq!(base.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(popped.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(pushed.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(pushed.len(), 4);
}

#[test]
fn equality_ignores_layout() {
    // same contents, different split between front and back
    let a = Queue::empty().push(0).push(1).push(2).pop().unwrap();
    let b = Queue::empty().push(1).push(2);
    assert_eq!(a, b);
    assert_eq!(format!("{:?}", a), "[1, 2]");
}

#[test]
fn extend_appends_in_order() {
    let q = Queue::empty().push(0).extend(vec![1, 2, 3]);
    assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

use statespace::{
    puzzles::{eight, farmer, jugs, queens},
    Container, ContainerError, PriorityQueue, Queue, Stack, Trace,
};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn farmer_has_two_crossings() {
    let found = farmer::solutions();
    assert_eq!(found.len(), 2);
    for path in found.iter() {
        assert_eq!(Trace::new(path).moves(), 7);
        assert_eq!(path.first(), Some(&farmer::Position::START));
        assert_eq!(path.last(), Some(&farmer::Position::GOAL));
    }
}

#[test]
fn queens() {
    assert!(queens::solutions(2).is_empty());
    assert_eq!(queens::solutions_bfs(4).len(), 2);
}

#[test]
fn jugs_first_solution() {
    assert_eq!(
        jugs::first_solution(4, 3, 2),
        Some(vec![(0, 0), (4, 0), (1, 3), (1, 0), (0, 1), (4, 1), (2, 3)])
    );
}

#[test]
fn eight_puzzle_one_move() {
    let start = eight::Board([1, 2, 3, 8, 4, 0, 7, 6, 5]);
    let path = eight::solve_best_first(start).unwrap();
    assert_eq!(path, vec![start, eight::Board::GOAL]);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn containers_retrieval_order() {
    let stack = Stack::empty().push('y').push('x');
    assert_eq!(stack.pop().unwrap(), Stack::empty().push('y'));

    let queue = Queue::empty().push('y').push('x');
    assert_eq!(queue.pop().unwrap(), Queue::empty().push('x'));

    let pq: PriorityQueue<char> = PriorityQueue::empty().push('y').push('x');
    assert_eq!(pq.pop().unwrap(), PriorityQueue::empty().push('y'));
}

#[test]
fn empty_containers_fail() {
    assert!(matches!(
        Stack::<u8>::empty().peek(),
        Err(ContainerError::Empty(_))
    ));
    assert!(matches!(
        Queue::<u8>::empty().pop(),
        Err(ContainerError::Empty(_))
    ));
    assert!(matches!(
        PriorityQueue::<u8>::empty().pop(),
        Err(ContainerError::Empty(_))
    ));
}

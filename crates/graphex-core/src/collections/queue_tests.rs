//! Tests for Queue.

use super::queue::Queue;
use crate::error::Error;

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    for v in [4, 0, 2, 9] {
        queue.enqueue(v);
    }
    assert_eq!(queue.len(), 4);

    let drained: Vec<usize> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, vec![4, 0, 2, 9]);
    assert!(queue.is_empty());
}

#[test]
fn test_dequeue_empty_fails() {
    let mut queue: Queue = Queue::new();
    assert_eq!(queue.dequeue(), Err(Error::EmptyCollection("Queue")));
}

#[test]
fn test_empty_after_draining_then_reusable() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    assert_eq!(queue.dequeue().unwrap(), 1);
    assert!(queue.is_empty());
    assert!(queue.dequeue().is_err());

    // Tail must have been reset: a new enqueue becomes the head.
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue().unwrap(), 2);
    assert_eq!(queue.dequeue().unwrap(), 3);
}

#[test]
fn test_interleaved_operations_reuse_slots() {
    let mut queue = Queue::new();
    let mut expected = std::collections::VecDeque::new();

    for round in 0..50usize {
        queue.enqueue(round);
        expected.push_back(round);
        if round % 3 == 0 {
            assert_eq!(queue.dequeue().ok(), expected.pop_front());
        }
    }
    assert_eq!(queue.len(), expected.len());

    while let Some(want) = expected.pop_front() {
        assert_eq!(queue.dequeue().unwrap(), want);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_generic_payload() {
    let mut queue = Queue::new();
    queue.enqueue("a".to_string());
    queue.enqueue("b".to_string());
    assert_eq!(queue.dequeue().unwrap(), "a");
    assert_eq!(queue.peek().map(String::as_str), Some("b"));
}

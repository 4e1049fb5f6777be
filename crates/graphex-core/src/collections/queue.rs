//! Singly-linked FIFO queue used by breadth-first search.
//!
//! Nodes live in an arena and link to their successor by slot index, so
//! enqueue and dequeue are both O(1) without shared ownership. Freed slots are
//! threaded onto a free list and reused by later enqueues.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct QueueNode<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// FIFO queue of values (vertex ids by default).
///
/// # Example
///
/// ```rust
/// use graphex_core::collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(3);
/// queue.enqueue(1);
/// assert_eq!(queue.dequeue().unwrap(), 3);
/// assert_eq!(queue.dequeue().unwrap(), 1);
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T = usize> {
    nodes: Vec<QueueNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Head of the free-slot list, linked through `next`.
    free: Option<usize>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` at the tail.
    pub fn enqueue(&mut self, value: T) {
        let node = QueueNode {
            value: Some(value),
            next: None,
        };
        let slot = match self.free {
            Some(slot) => {
                self.free = self.nodes[slot].next;
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the value at the head.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        let slot = self.head.ok_or(Error::EmptyCollection("Queue"))?;
        let node = &mut self.nodes[slot];
        let value = node.value.take().ok_or(Error::EmptyCollection("Queue"))?;

        self.head = node.next;
        node.next = self.free;
        self.free = Some(slot);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(value)
    }

    /// Returns the value at the head without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|slot| self.nodes[slot].value.as_ref())
    }

    /// Returns true if the queue holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of queued values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}

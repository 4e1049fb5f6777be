//! Indexed binary min-heap with decrease-key, used by Dijkstra and Prim.
//!
//! The heap stores `(vertex, priority)` pairs; a position table maps every
//! vertex id to its heap slot, giving O(1) membership tests and O(log n)
//! `decrease_key`. Invariant: `position[v] == Some(i)` iff `heap[i].vertex == v`.
//!
//! Priorities are `i64` by default. Any totally ordered `Copy` type works,
//! which lets callers use a priority with a distinct "unreached" value above
//! every weight.

use std::fmt;

use crate::error::{Error, Result};

/// A single heap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<P = i64> {
    /// Vertex id.
    pub vertex: usize,
    /// Current priority of the vertex.
    pub priority: P,
}

/// Array-backed binary min-heap over vertex ids with a fixed capacity.
///
/// Ties between equal priorities resolve by heap position, which is
/// deterministic for a given sequence of operations.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<P = i64> {
    heap: Vec<HeapEntry<P>>,
    position: Vec<Option<usize>>,
    capacity: usize,
}

impl IndexedPriorityQueue {
    /// Creates an empty `i64`-priority queue accepting vertex ids in
    /// `[0, capacity)`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

impl<P: Ord + Copy + fmt::Display> IndexedPriorityQueue<P> {
    /// Creates an empty queue with priority type `P` accepting vertex ids in
    /// `[0, capacity)`. The capacity is fixed.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            capacity,
        }
    }

    /// Returns the fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no vertex is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `vertex` is currently queued. Out-of-range ids are
    /// never queued.
    #[must_use]
    pub fn in_queue(&self, vertex: usize) -> bool {
        self.position.get(vertex).is_some_and(Option::is_some)
    }

    /// Inserts `vertex` with `priority`.
    ///
    /// # Errors
    ///
    /// - `Error::FullCollection` if the queue is at capacity.
    /// - `Error::OutOfRange` if `vertex >= capacity`.
    /// - `Error::InvalidArgument` if `vertex` is already queued.
    pub fn insert(&mut self, vertex: usize, priority: P) -> Result<()> {
        if self.heap.len() == self.capacity {
            return Err(Error::FullCollection {
                capacity: self.capacity,
            });
        }
        Error::check_index(vertex, self.capacity)?;
        if self.in_queue(vertex) {
            return Err(Error::InvalidArgument(format!(
                "vertex {vertex} is already in the priority queue"
            )));
        }

        let slot = self.heap.len();
        self.heap.push(HeapEntry { vertex, priority });
        self.position[vertex] = Some(slot);
        self.sift_up(slot);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyCollection` if the queue is empty.
    pub fn extract_min(&mut self) -> Result<usize> {
        let last = self
            .heap
            .pop()
            .ok_or(Error::EmptyCollection("Priority queue"))?;

        let min = if self.heap.is_empty() {
            last
        } else {
            let root = self.heap[0];
            self.heap[0] = last;
            self.position[last.vertex] = Some(0);
            self.sift_down(0);
            root
        };
        self.position[min.vertex] = None;
        Ok(min.vertex)
    }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<HeapEntry<P>> {
        self.heap.first().copied()
    }

    /// Lowers the priority of a queued vertex and restores heap order.
    ///
    /// # Errors
    ///
    /// - `Error::NotInCollection` if `vertex` is not queued.
    /// - `Error::InvalidKeyUpdate` if `new_priority` exceeds the current one.
    pub fn decrease_key(&mut self, vertex: usize, new_priority: P) -> Result<()> {
        let slot = self.slot_of(vertex)?;
        let current = self.heap[slot].priority;
        if new_priority > current {
            return Err(Error::InvalidKeyUpdate {
                vertex,
                current: current.to_string(),
                requested: new_priority.to_string(),
            });
        }
        self.heap[slot].priority = new_priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the current priority of a queued vertex.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInCollection` if `vertex` is not queued.
    pub fn get_priority(&self, vertex: usize) -> Result<P> {
        let slot = self.slot_of(vertex)?;
        Ok(self.heap[slot].priority)
    }

    fn slot_of(&self, vertex: usize) -> Result<usize> {
        self.position
            .get(vertex)
            .copied()
            .flatten()
            .ok_or(Error::NotInCollection(vertex))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].priority > self.heap[slot].priority {
                self.swap_slots(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].vertex] = Some(a);
        self.position[self.heap[b].vertex] = Some(b);
    }
}

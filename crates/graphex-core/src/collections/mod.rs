//! Scratch data structures built for the graph algorithms.
//!
//! Each algorithm call creates its own instance and drops it before returning.
//!
//! # Example
//!
//! ```rust
//! use graphex_core::collections::{IndexedPriorityQueue, UnionFind};
//!
//! let mut pq = IndexedPriorityQueue::new(3);
//! pq.insert(0, 10).unwrap();
//! pq.insert(1, 5).unwrap();
//! pq.decrease_key(0, 1).unwrap();
//! assert_eq!(pq.extract_min().unwrap(), 0);
//!
//! let mut uf = UnionFind::new(3);
//! uf.unite(0, 2).unwrap();
//! assert!(uf.is_connected(2, 0).unwrap());
//! ```

mod indexed_priority_queue;
mod queue;
mod union_find;

#[cfg(test)]
mod queue_tests;

pub use indexed_priority_queue::{HeapEntry, IndexedPriorityQueue};
pub use queue::Queue;
pub use union_find::UnionFind;

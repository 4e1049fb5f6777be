//! Graph algorithms returning spanning trees and forests.
//!
//! Every function reads the input [`Graph`](crate::graph::Graph) and builds a
//! fresh result graph with the same vertex count whose edges carry the
//! original edge weights. Scratch structures (queue, indexed heap, union-find)
//! are created per call and dropped before returning.
//!
//! | Function | Scratch structure | Result |
//! |----------|-------------------|--------|
//! | [`bfs`] | [`Queue`](crate::collections::Queue) | BFS tree of the source's component |
//! | [`dfs`] | explicit stack | DFS tree of the source's component |
//! | [`dijkstra`] | [`IndexedPriorityQueue`](crate::collections::IndexedPriorityQueue) | shortest-path tree |
//! | [`prim`] | [`IndexedPriorityQueue`](crate::collections::IndexedPriorityQueue) | minimum spanning forest |
//! | [`kruskal`] | [`UnionFind`](crate::collections::UnionFind) | minimum spanning forest |

use std::fmt;

mod mst;
mod shortest_path;
mod traversal;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod traversal_tests;

pub use mst::{kruskal, prim};
pub use shortest_path::{dijkstra, shortest_paths, ShortestPaths};
pub use traversal::{bfs, dfs};

/// Key or tentative distance held in the indexed heap.
///
/// `Unreached` orders after every finite value, `Finite(i64::MAX)` included,
/// so no edge weight can be mistaken for +∞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Cost {
    Finite(i64),
    Unreached,
}

impl Cost {
    pub(crate) fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unreached => None,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Unreached => f.write_str("+inf"),
        }
    }
}

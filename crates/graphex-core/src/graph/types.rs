//! Edge value types shared by the graph and the algorithms.

use serde::{Deserialize, Serialize};

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: i64 = 1;

/// One record of a vertex's adjacency list.
///
/// The owning vertex is implicit (it is the list the record lives in).
///
/// # Example
///
/// ```rust
/// use graphex_core::graph::Edge;
///
/// let edge = Edge::new(3, 7);
/// assert_eq!(edge.destination(), 3);
/// assert_eq!(edge.weight(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    destination: usize,
    weight: i64,
}

impl Edge {
    /// Creates an edge record pointing at `destination`.
    #[must_use]
    pub fn new(destination: usize, weight: i64) -> Self {
        Self {
            destination,
            weight,
        }
    }

    /// Returns the vertex this record points to.
    #[must_use]
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// An undirected edge with both endpoints, as reported by [`super::Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Lower-numbered endpoint.
    pub source: usize,
    /// Higher-numbered endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: i64,
}

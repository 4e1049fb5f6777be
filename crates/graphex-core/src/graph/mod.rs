//! Undirected weighted graph.
//!
//! Provides the [`Graph`] adjacency-list store and its edge value types. The
//! algorithms in [`crate::algorithms`] only read a `Graph` and always return a
//! new one.
//!
//! # Example
//!
//! ```rust
//! use graphex_core::graph::Graph;
//!
//! let mut g = Graph::new(3).unwrap();
//! g.add_edge(0, 1, 4).unwrap();
//! g.add_edge(1, 2, 2).unwrap();
//!
//! assert!(g.has_edge(1, 0).unwrap());
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(
//!     g.to_string(),
//!     "Vertex 0 -> (1, weight: 4) \nVertex 1 -> (0, weight: 4) (2, weight: 2) \nVertex 2 -> (1, weight: 2) \n"
//! );
//! ```

mod adjacency;
mod types;


pub use adjacency::Graph;
pub use types::{Edge, WeightedEdge, DEFAULT_EDGE_WEIGHT};

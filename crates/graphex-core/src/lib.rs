//! # Graphex Core
//!
//! Undirected weighted graphs and the classical algorithms that build trees
//! from them.
//!
//! ## Features
//!
//! - **Adjacency-list graph**: fixed vertex count, symmetric `add_edge` /
//!   `remove_edge`, deep-copy `Clone`, deterministic text dump
//! - **Traversals**: BFS (FIFO queue) and iterative DFS (explicit stack)
//! - **Shortest paths**: Dijkstra over an indexed min-heap with decrease-key
//! - **Spanning forests**: Prim (indexed heap) and Kruskal (union-find)
//! - **Typed errors**: every precondition violation is a distinct [`ErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust
//! use graphex_core::{algorithms, Graph};
//!
//! fn main() -> Result<(), graphex_core::Error> {
//!     let mut g = Graph::new(4)?;
//!     g.add_edge(0, 1, 4)?;
//!     g.add_edge(1, 2, 1)?;
//!     g.add_edge(0, 2, 3)?;
//!     g.add_edge(2, 3, 2)?;
//!
//!     let mst = algorithms::prim(&g)?;
//!     assert_eq!(mst.edge_count(), 3);
//!     assert_eq!(mst.total_weight(), 6);
//!
//!     let paths = algorithms::shortest_paths(&g, 0)?;
//!     assert_eq!(paths.distance(3), Some(5));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation
    )
)]

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use algorithms::{bfs, dfs, dijkstra, kruskal, prim, shortest_paths, ShortestPaths};
pub use collections::{IndexedPriorityQueue, Queue, UnionFind};
pub use config::{
    ConfigError, GraphConfig, GraphexConfig, LimitsConfig, LogFormat, LoggingConfig,
};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Edge, Graph, WeightedEdge, DEFAULT_EDGE_WEIGHT};

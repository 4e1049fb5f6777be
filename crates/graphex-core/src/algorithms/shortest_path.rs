//! Dijkstra single-source shortest paths.
//!
//! Weights must be non-negative; negative weights are not detected and give
//! undefined (but memory-safe) results.

use serde::Serialize;

use crate::collections::IndexedPriorityQueue;
use crate::error::{Error, Result};
use crate::graph::Graph;

use super::Cost;

/// Distances and parent pointers produced by [`shortest_paths`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Option<i64>>,
    parents: Vec<Option<usize>>,
    #[serde(skip)]
    parent_weights: Vec<i64>,
}

impl ShortestPaths {
    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the shortest distance to `vertex`, or `None` if unreachable or
    /// not a vertex.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns the distance of every vertex, `None` for unreachable ones.
    #[must_use]
    pub fn distances(&self) -> &[Option<i64>] {
        &self.distances
    }

    /// Returns the predecessor of `vertex` on its shortest path.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the vertices on the shortest path from the source to `vertex`,
    /// both ends included, or `None` if `vertex` is unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.parent(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Builds the shortest-path tree: one edge `(parent[v], v)` per vertex
    /// with a parent, in vertex order, carrying the original edge weight.
    ///
    /// # Errors
    ///
    /// Propagates graph construction errors (none occur for results produced
    /// by [`shortest_paths`]).
    pub fn to_tree(&self) -> Result<Graph> {
        let mut tree = Graph::new(self.parents.len())?;
        for (vertex, parent) in self.parents.iter().enumerate() {
            if vertex == self.source {
                continue;
            }
            if let Some(parent) = *parent {
                tree.add_edge(parent, vertex, self.parent_weights[vertex])?;
            }
        }
        Ok(tree)
    }
}

/// Runs Dijkstra from `source` and returns distances and parent pointers.
///
/// Every vertex is seeded into the priority queue up front (source at 0, the
/// rest at +∞). Unreachable vertices are still extracted but never relax
/// their neighbors.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `source` is not a vertex of `graph`.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let n = graph.num_vertices();
    Error::check_index(source, n)?;

    let mut distance = vec![Cost::Unreached; n];
    let mut parents = vec![None; n];
    let mut parent_weights = vec![0; n];
    distance[source] = Cost::Finite(0);

    let mut queue = IndexedPriorityQueue::with_capacity(n);
    for (vertex, &d) in distance.iter().enumerate() {
        queue.insert(vertex, d)?;
    }

    while !queue.is_empty() {
        let u = queue.extract_min()?;
        let Cost::Finite(reached) = distance[u] else {
            continue;
        };
        for edge in graph.adj_list(u)? {
            let v = edge.destination();
            if !queue.in_queue(v) {
                continue;
            }
            // A path longer than i64::MAX is treated as unreachable.
            let Some(candidate) = reached.checked_add(edge.weight()).map(Cost::Finite) else {
                continue;
            };
            if candidate < distance[v] {
                distance[v] = candidate;
                parents[v] = Some(u);
                parent_weights[v] = edge.weight();
                queue.decrease_key(v, candidate)?;
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances: distance.into_iter().map(Cost::finite).collect(),
        parents,
        parent_weights,
    })
}

/// Shortest-path tree from `source`.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `source` is not a vertex of `graph`.
///
/// # Example
///
/// ```rust
/// use graphex_core::algorithms::dijkstra;
/// use graphex_core::graph::Graph;
///
/// let mut g = Graph::new(3).unwrap();
/// g.add_edge(0, 1, 1).unwrap();
/// g.add_edge(1, 2, 1).unwrap();
/// g.add_edge(0, 2, 5).unwrap();
///
/// let tree = dijkstra(&g, 0).unwrap();
/// assert!(tree.has_edge(1, 2).unwrap());
/// assert!(!tree.has_edge(0, 2).unwrap());
/// ```
pub fn dijkstra(graph: &Graph, source: usize) -> Result<Graph> {
    let tree = shortest_paths(graph, source)?.to_tree()?;
    tracing::debug!(
        algorithm = "dijkstra",
        source,
        vertices = tree.num_vertices(),
        edges = tree.edge_count(),
        "Shortest-path tree built"
    );
    Ok(tree)
}

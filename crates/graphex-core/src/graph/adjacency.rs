//! Undirected weighted graph stored as one adjacency list per vertex.
//!
//! Every `add_edge(u, v, w)` writes two records: `(v, w)` into `u`'s list and
//! `(u, w)` into `v`'s list. Lists keep insertion order, which fixes the
//! visiting order of every traversal built on top of them.

use std::fmt;
use std::io;

use crate::collections::UnionFind;
use crate::config::LimitsConfig;
use crate::error::{Error, Result};

use super::types::{Edge, WeightedEdge, DEFAULT_EDGE_WEIGHT};

/// Undirected weighted graph with a fixed vertex count.
///
/// `Clone` is a deep copy: the two graphs share no adjacency storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidArgument(
                "Number of vertices must be positive".to_string(),
            ));
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Creates a graph, rejecting vertex counts above `limits.max_vertices`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `vertex_count` is zero or exceeds
    /// the configured limit.
    pub fn with_limits(vertex_count: usize, limits: &LimitsConfig) -> Result<Self> {
        if vertex_count > limits.max_vertices {
            return Err(Error::InvalidArgument(format!(
                "Number of vertices {vertex_count} exceeds limit {}",
                limits.max_vertices
            )));
        }
        Self::new(vertex_count)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds an undirected edge `u - v` with the given weight.
    ///
    /// Appends to the tail of both lists. Self-loops and parallel edges are
    /// accepted as-is. Lists are `Vec`s, so the append is O(1) amortized
    /// instead of a walk to the tail of a linked list; the resulting order is
    /// the same.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either endpoint is not a vertex.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(Edge::new(v, weight));
        self.adjacency[v].push(Edge::new(u, weight));
        Ok(())
    }

    /// Adds an undirected edge with [`DEFAULT_EDGE_WEIGHT`].
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either endpoint is not a vertex.
    pub fn add_unit_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(u, v, DEFAULT_EDGE_WEIGHT)
    }

    /// Removes the undirected edge `u - v`.
    ///
    /// Removes the first record pointing at `v` from `u`'s list and the first
    /// record pointing at `u` from `v`'s list, independently. Succeeds if at
    /// least one of the two was found.
    ///
    /// # Errors
    ///
    /// - `Error::OutOfRange` if either endpoint is not a vertex.
    /// - `Error::EdgeNotFound` if neither direction exists.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let removed_forward = self.remove_record(u, v);
        let removed_reverse = self.remove_record(v, u);

        match (removed_forward, removed_reverse) {
            (false, false) => Err(Error::EdgeNotFound { from: u, to: v }),
            (true, true) => Ok(()),
            // Only reachable if the two lists have drifted out of symmetry.
            _ => {
                tracing::warn!(
                    u,
                    v,
                    removed_forward,
                    removed_reverse,
                    "Removed edge had only one direction recorded"
                );
                Ok(())
            }
        }
    }

    fn remove_record(&mut self, from: usize, to: usize) -> bool {
        let list = &mut self.adjacency[from];
        match list.iter().position(|e| e.destination() == to) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    // ── Read access ────────────────────────────────────────────────────

    /// Returns the adjacency list of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `vertex` is not a vertex.
    pub fn adj_list(&self, vertex: usize) -> Result<&[Edge]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Returns true if `u`'s list holds a record pointing at `v`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either endpoint is not a vertex.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(v)?;
        Ok(self.adj_list(u)?.iter().any(|e| e.destination() == v))
    }

    /// Returns the number of records in `vertex`'s list.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `vertex` is not a vertex.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        Ok(self.adj_list(vertex)?.len())
    }

    /// Iterates over each undirected edge once.
    ///
    /// An edge is reported from the list of its lower-numbered endpoint, in
    /// vertex order then list order. Self-loops are not reported.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |e| u < e.destination())
                .map(move |e| WeightedEdge {
                    source: u,
                    target: e.destination(),
                    weight: e.weight(),
                })
        })
    }

    /// Returns the number of undirected edges (see [`Graph::edges`]).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns the sum of all undirected edge weights (see [`Graph::edges`]).
    ///
    /// Summed as `i128`, so large `i64` weights cannot overflow the total.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        self.edges().map(|e| i128::from(e.weight)).sum()
    }

    /// Returns the number of connected components.
    #[must_use]
    pub fn connected_components(&self) -> usize {
        let mut sets = UnionFind::new(self.num_vertices());
        for (u, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                // Indices come from this graph, so they are always in range.
                let _ = sets.unite(u, edge.destination());
            }
        }
        sets.set_count()
    }

    /// Returns true if every vertex is reachable from every other.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected_components() == 1
    }

    // ── Diagnostic dump ────────────────────────────────────────────────

    /// Writes the adjacency dump, one line per vertex.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Prints the adjacency dump to standard output.
    pub fn print_graph(&self) {
        print!("{self}");
    }

    /// Appends one directed record, bypassing the symmetric insert.
    #[cfg(test)]
    pub(crate) fn push_record(&mut self, from: usize, edge: Edge) {
        self.adjacency[from].push(edge);
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        Error::check_index(vertex, self.adjacency.len())
    }
}

/// `Vertex i -> (dest, weight: w) (dest, weight: w) ` per line.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {vertex} -> ")?;
            for edge in list {
                write!(f, "({}, weight: {}) ", edge.destination(), edge.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

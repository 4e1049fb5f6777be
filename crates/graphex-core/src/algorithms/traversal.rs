//! Breadth-first and depth-first spanning trees.
//!
//! Both traversals start from a source vertex and return a new [`Graph`] of
//! the same vertex count holding one tree edge per discovered vertex, carrying
//! the original edge weight. Vertices unreachable from the source stay
//! isolated in the result.

use crate::collections::Queue;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// BFS tree from `source`.
///
/// A vertex's tree edge comes from the first dequeued vertex that sees it, in
/// adjacency-list order.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `source` is not a vertex of `graph`.
///
/// # Example
///
/// ```rust
/// use graphex_core::algorithms::bfs;
/// use graphex_core::graph::Graph;
///
/// let mut g = Graph::new(3).unwrap();
/// g.add_edge(0, 1, 2).unwrap();
/// g.add_edge(1, 2, 5).unwrap();
/// g.add_edge(0, 2, 9).unwrap();
///
/// let tree = bfs(&g, 0).unwrap();
/// assert!(tree.has_edge(0, 1).unwrap());
/// assert!(tree.has_edge(0, 2).unwrap());
/// assert!(!tree.has_edge(1, 2).unwrap());
/// ```
pub fn bfs(graph: &Graph, source: usize) -> Result<Graph> {
    let n = graph.num_vertices();
    Error::check_index(source, n)?;

    let mut tree = Graph::new(n)?;
    let mut visited = vec![false; n];
    let mut queue = Queue::new();

    visited[source] = true;
    queue.enqueue(source);

    while !queue.is_empty() {
        let current = queue.dequeue()?;
        for edge in graph.adj_list(current)? {
            let next = edge.destination();
            if !visited[next] {
                visited[next] = true;
                queue.enqueue(next);
                tree.add_edge(current, next, edge.weight())?;
            }
        }
    }

    tracing::debug!(
        algorithm = "bfs",
        source,
        vertices = n,
        edges = tree.edge_count(),
        "Traversal tree built"
    );
    Ok(tree)
}

/// Pending visit on the DFS stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    /// Vertex that pushed this frame and the weight of the edge used.
    via: Option<(usize, i64)>,
}

/// DFS tree from `source`, using an explicit stack.
///
/// Every unvisited neighbor is pushed when a vertex is first popped, so a
/// vertex may sit on the stack several times. Only its first pop marks it
/// visited and records the tree edge from the vertex that pushed that frame;
/// later frames for it are discarded. Neighbors are pushed in list order, so
/// the last neighbor in a list is explored first.
///
/// # Errors
///
/// Returns `Error::OutOfRange` if `source` is not a vertex of `graph`.
pub fn dfs(graph: &Graph, source: usize) -> Result<Graph> {
    let n = graph.num_vertices();
    Error::check_index(source, n)?;

    let mut tree = Graph::new(n)?;
    let mut visited = vec![false; n];
    let mut stack = vec![Frame {
        vertex: source,
        via: None,
    }];

    while let Some(frame) = stack.pop() {
        if visited[frame.vertex] {
            continue;
        }
        visited[frame.vertex] = true;
        if let Some((parent, weight)) = frame.via {
            tree.add_edge(parent, frame.vertex, weight)?;
        }

        for edge in graph.adj_list(frame.vertex)? {
            if !visited[edge.destination()] {
                stack.push(Frame {
                    vertex: edge.destination(),
                    via: Some((frame.vertex, edge.weight())),
                });
            }
        }
    }

    tracing::debug!(
        algorithm = "dfs",
        source,
        vertices = n,
        edges = tree.edge_count(),
        "Traversal tree built"
    );
    Ok(tree)
}

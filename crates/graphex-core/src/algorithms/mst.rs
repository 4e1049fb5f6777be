//! Minimum spanning forests: Prim and Kruskal.
//!
//! Both return a forest with one tree per connected component, so the result
//! has `n - components` edges. Edge sets may differ between the two when
//! weights tie, total weight never does.

use crate::collections::{IndexedPriorityQueue, UnionFind};
use crate::error::Result;
use crate::graph::{Graph, WeightedEdge};

use super::Cost;

/// Prim's minimum spanning forest, grown from vertex 0.
///
/// Every vertex is seeded into the priority queue (vertex 0 at key 0, the rest
/// unreached). Once vertex 0's component is exhausted, the remaining vertices come
/// out unreached in heap order and still relax their neighbors, which starts a new
/// tree in each further component.
///
/// # Errors
///
/// Only internal invariant violations can surface here.
pub fn prim(graph: &Graph) -> Result<Graph> {
    let n = graph.num_vertices();
    let mut tree = Graph::new(n)?;

    let mut key = vec![Cost::Unreached; n];
    // Tree neighbor and the weight of the edge to it.
    let mut parent: Vec<Option<(usize, i64)>> = vec![None; n];
    key[0] = Cost::Finite(0);

    let mut queue = IndexedPriorityQueue::with_capacity(n);
    for (vertex, &k) in key.iter().enumerate() {
        queue.insert(vertex, k)?;
    }

    while !queue.is_empty() {
        let u = queue.extract_min()?;
        for edge in graph.adj_list(u)? {
            let v = edge.destination();
            let candidate = Cost::Finite(edge.weight());
            if queue.in_queue(v) && candidate < key[v] {
                key[v] = candidate;
                parent[v] = Some((u, edge.weight()));
                queue.decrease_key(v, candidate)?;
            }
        }
    }

    for (vertex, link) in parent.iter().enumerate() {
        if let Some((p, weight)) = *link {
            tree.add_edge(p, vertex, weight)?;
        }
    }

    tracing::debug!(
        algorithm = "prim",
        vertices = n,
        edges = tree.edge_count(),
        weight = tree.total_weight(),
        "Spanning forest built"
    );
    Ok(tree)
}

/// Kruskal's minimum spanning forest.
///
/// Collects each undirected edge once (from its lower-numbered endpoint),
/// orders them by weight with a selection sort, then keeps every edge whose
/// endpoints are not yet connected.
///
/// # Errors
///
/// Only internal invariant violations can surface here.
///
/// # Example
///
/// ```rust
/// use graphex_core::algorithms::kruskal;
/// use graphex_core::graph::Graph;
///
/// let mut g = Graph::new(3).unwrap();
/// g.add_edge(0, 1, 3).unwrap();
/// g.add_edge(1, 2, 1).unwrap();
/// g.add_edge(0, 2, 2).unwrap();
///
/// let mst = kruskal(&g).unwrap();
/// assert_eq!(mst.edge_count(), 2);
/// assert_eq!(mst.total_weight(), 3);
/// ```
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    let n = graph.num_vertices();
    let mut tree = Graph::new(n)?;

    let mut edges: Vec<WeightedEdge> = graph.edges().collect();
    selection_sort_by_weight(&mut edges);

    let mut sets = UnionFind::new(n);
    for edge in &edges {
        if !sets.is_connected(edge.source, edge.target)? {
            tree.add_edge(edge.source, edge.target, edge.weight)?;
            sets.unite(edge.source, edge.target)?;
        }
    }

    tracing::debug!(
        algorithm = "kruskal",
        vertices = n,
        candidates = edges.len(),
        edges = tree.edge_count(),
        weight = tree.total_weight(),
        "Spanning forest built"
    );
    Ok(tree)
}

/// Ascending by weight, O(E²). Swaps the minimum of the unsorted suffix into
/// place, so equal weights keep no guaranteed relative order.
fn selection_sort_by_weight(edges: &mut [WeightedEdge]) {
    let len = edges.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            if edges[j].weight < edges[min_index].weight {
                min_index = j;
            }
        }
        if min_index != i {
            edges.swap(i, min_index);
        }
    }
}

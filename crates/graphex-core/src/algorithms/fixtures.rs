//! Graphs shared by the algorithm tests.

use crate::graph::Graph;

pub(crate) fn build(vertices: usize, edges: &[(usize, usize, i64)]) -> Graph {
    let mut g = Graph::new(vertices).unwrap();
    for &(u, v, w) in edges {
        g.add_edge(u, v, w).unwrap();
    }
    g
}

/// 6 vertices, 9 weighted edges, minimum spanning weight 17.
pub(crate) fn weighted_six() -> Graph {
    build(
        6,
        &[
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (2, 4, 5),
            (3, 4, 7),
            (3, 5, 6),
            (4, 5, 8),
        ],
    )
}

/// 5 vertices, unit weights: 0-1, 0-2, 1-3, 2-3, 2-4, 3-4.
pub(crate) fn unit_five() -> Graph {
    build(
        5,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1), (2, 4, 1), (3, 4, 1)],
    )
}

/// Components {0, 1}, {2, 3} and isolated 4.
pub(crate) fn split_five() -> Graph {
    build(5, &[(0, 1, 1), (2, 3, 2)])
}

/// Undirected edges as sorted `(min, max, weight)` triples.
pub(crate) fn edge_set(g: &Graph) -> Vec<(usize, usize, i64)> {
    let mut edges: Vec<_> = g.edges().map(|e| (e.source, e.target, e.weight)).collect();
    edges.sort_unstable();
    edges
}

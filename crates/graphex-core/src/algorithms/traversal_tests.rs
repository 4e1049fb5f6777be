//! Tests for BFS and DFS spanning trees.

use super::fixtures::{build, edge_set, split_five, unit_five, weighted_six};
use super::traversal::{bfs, dfs};
use crate::error::{Error, ErrorKind};
use crate::graph::Graph;

// ── BFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_bfs_layers() {
    let g = unit_five();
    let tree = bfs(&g, 0).unwrap();

    assert_eq!(tree.num_vertices(), 5);
    assert_eq!(tree.edge_count(), 4);
    assert!(tree.is_connected());
    assert_eq!(
        edge_set(&tree),
        vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]
    );
}

#[test]
fn test_bfs_keeps_original_weights() {
    let g = weighted_six();
    let tree = bfs(&g, 0).unwrap();
    // Layer 1: 1 and 2 from 0; layer 2: 3 from 1, 4 from 2; layer 3: 5 from 3.
    assert_eq!(
        edge_set(&tree),
        vec![(0, 1, 4), (0, 2, 3), (1, 3, 2), (2, 4, 5), (3, 5, 6)]
    );
}

#[test]
fn test_bfs_disconnected_reaches_component_only() {
    let g = split_five();
    let tree = bfs(&g, 0).unwrap();
    assert_eq!(tree.edge_count(), 1);
    assert!(tree.has_edge(0, 1).unwrap());
    assert!(!tree.has_edge(0, 2).unwrap());
    assert_eq!(tree.degree(4).unwrap(), 0);
}

#[test]
fn test_bfs_from_other_source() {
    let g = split_five();
    let tree = bfs(&g, 3).unwrap();
    assert_eq!(edge_set(&tree), vec![(2, 3, 2)]);
}

#[test]
fn test_bfs_single_vertex() {
    let g = Graph::new(1).unwrap();
    assert_eq!(bfs(&g, 0).unwrap().edge_count(), 0);
}

#[test]
fn test_bfs_source_out_of_range() {
    let g = unit_five();
    assert_eq!(bfs(&g, 5), Err(Error::OutOfRange { index: 5, len: 5 }));
}

#[test]
fn test_bfs_does_not_mutate_input() {
    let g = weighted_six();
    let before = g.clone();
    let _ = bfs(&g, 2).unwrap();
    assert_eq!(g, before);
}

// ── DFS Tests ──────────────────────────────────────────────────────

#[test]
fn test_dfs_first_pop_fixes_parent() {
    let g = unit_five();
    let tree = dfs(&g, 0).unwrap();

    // Stack order explores 2 before 1, and 1 is finally reached through 3
    // even though a frame (1, via 0) was pushed first.
    assert_eq!(
        edge_set(&tree),
        vec![(0, 2, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)]
    );
    assert!(!tree.has_edge(0, 1).unwrap());
    assert!(tree.is_connected());
}

#[test]
fn test_dfs_triangle_is_not_recursive_shape() {
    let g = build(3, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
    let tree = dfs(&g, 0).unwrap();
    // A recursive DFS would give 0-1, 1-2.
    assert_eq!(edge_set(&tree), vec![(0, 2, 1), (1, 2, 1)]);
}

#[test]
fn test_dfs_spans_connected_graph() {
    let g = weighted_six();
    for source in 0..g.num_vertices() {
        let tree = dfs(&g, source).unwrap();
        assert_eq!(tree.edge_count(), 5, "source {source}");
        assert!(tree.is_connected(), "source {source}");
    }
}

#[test]
fn test_dfs_disconnected_and_single_vertex() {
    let tree = dfs(&split_five(), 2).unwrap();
    assert_eq!(edge_set(&tree), vec![(2, 3, 2)]);

    let single = Graph::new(1).unwrap();
    assert_eq!(dfs(&single, 0).unwrap().edge_count(), 0);
}

#[test]
fn test_dfs_deep_path_does_not_overflow() {
    let n = 50_000;
    let mut g = Graph::new(n).unwrap();
    for v in 1..n {
        g.add_edge(v - 1, v, 1).unwrap();
    }
    let tree = dfs(&g, 0).unwrap();
    assert_eq!(tree.edge_count(), n - 1);
}

#[test]
fn test_dfs_source_out_of_range() {
    let g = unit_five();
    assert_eq!(dfs(&g, 9).unwrap_err().kind(), ErrorKind::OutOfRange);
}

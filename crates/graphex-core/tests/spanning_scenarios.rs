//! End-to-end scenarios over the public API.

use graphex_core::{
    bfs, dfs, dijkstra, kruskal, prim, shortest_paths, Error, ErrorKind, Graph,
    IndexedPriorityQueue, Queue,
};

fn build(vertices: usize, edges: &[(usize, usize, i64)]) -> Graph {
    let mut g = Graph::new(vertices).expect("positive vertex count");
    for &(u, v, w) in edges {
        g.add_edge(u, v, w).expect("valid endpoints");
    }
    g
}

fn weighted_six() -> Graph {
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

#[test]
fn weighted_six_minimum_spanning_tree() {
    let g = weighted_six();
    for mst in [prim(&g).unwrap(), kruskal(&g).unwrap()] {
        assert_eq!(mst.edge_count(), 5);
        assert_eq!(mst.total_weight(), 17);
        assert!(mst.has_edge(1, 2).unwrap());
        assert!(mst.has_edge(1, 3).unwrap());
        assert!(mst.is_connected());
    }
}

#[test]
fn every_algorithm_spans_connected_graph() {
    let g = weighted_six();
    let n = g.num_vertices();
    let results = [
        ("bfs", bfs(&g, 0).unwrap()),
        ("dfs", dfs(&g, 0).unwrap()),
        ("dijkstra", dijkstra(&g, 0).unwrap()),
        ("prim", prim(&g).unwrap()),
        ("kruskal", kruskal(&g).unwrap()),
    ];
    for (name, tree) in results {
        assert_eq!(tree.num_vertices(), n, "{name}");
        assert_eq!(tree.edge_count(), n - 1, "{name}");
        assert!(tree.is_connected(), "{name}");
    }
}

#[test]
fn disconnected_graph_with_isolated_vertex() {
    let g = build(5, &[(0, 1, 1), (2, 3, 2)]);

    let tree = bfs(&g, 0).unwrap();
    assert_eq!(tree.edge_count(), 1);
    assert!(tree.has_edge(0, 1).unwrap());

    let forest = prim(&g).unwrap();
    assert_eq!(forest.edge_count(), 2);
    assert!(forest.has_edge(0, 1).unwrap());
    assert!(forest.has_edge(2, 3).unwrap());

    let forest = kruskal(&g).unwrap();
    assert_eq!(forest.edge_count(), 5 - g.connected_components());
}

#[test]
fn original_demonstration_graph() {
    let g = build(
        6,
        &[
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 5),
            (1, 3, 2),
            (2, 3, 7),
            (2, 4, 8),
            (3, 4, 6),
            (3, 5, 1),
            (4, 5, 9),
        ],
    );

    let paths = shortest_paths(&g, 0).unwrap();
    assert_eq!(
        paths.distances(),
        &[Some(0), Some(4), Some(3), Some(6), Some(11), Some(7)]
    );

    // 1 + 2 + 3 + 4 + 6
    assert_eq!(prim(&g).unwrap().total_weight(), 16);
    assert_eq!(kruskal(&g).unwrap().total_weight(), 16);
}

#[test]
fn dump_after_algorithm() {
    let g = build(3, &[(0, 1, 2), (1, 2, 1), (0, 2, 5)]);
    let tree = dijkstra(&g, 0).unwrap();
    assert_eq!(
        tree.to_string(),
        "Vertex 0 -> (1, weight: 2) \n\
         Vertex 1 -> (0, weight: 2) (2, weight: 1) \n\
         Vertex 2 -> (1, weight: 1) \n"
    );
}

#[test]
fn copy_is_independent_of_original() {
    let mut original = weighted_six();
    let copy = original.clone();
    original.remove_edge(1, 2).unwrap();
    original.add_edge(0, 5, 1).unwrap();

    assert!(copy.has_edge(1, 2).unwrap());
    assert!(!copy.has_edge(0, 5).unwrap());
    assert_eq!(kruskal(&copy).unwrap().total_weight(), 17);
}

#[test]
fn empty_collections_report_empty() {
    let mut queue: Queue = Queue::new();
    assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::EmptyCollection);

    let mut pq = IndexedPriorityQueue::new(4);
    assert_eq!(pq.extract_min().unwrap_err().kind(), ErrorKind::EmptyCollection);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(Graph::new(0).unwrap_err().kind(), ErrorKind::InvalidArgument);

    let mut g = build(4, &[(0, 1, 5), (1, 2, 3)]);
    assert_eq!(
        g.add_edge(0, 4, 1),
        Err(Error::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(g.remove_edge(0, 3).unwrap_err().kind(), ErrorKind::EdgeNotFound);
    assert_eq!(bfs(&g, 4).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(dfs(&g, 4).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(dijkstra(&g, 4).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(g.adj_list(4).unwrap_err().code(), "GRAPHEX-001");
}

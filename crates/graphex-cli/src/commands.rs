//! Subcommand implementations. Output goes to the given writer so the
//! commands can be driven from tests.

use std::io::Write;

use anyhow::{Context, Result};
use graphex_core::{bfs, dfs, dijkstra, kruskal, prim, Graph, GraphexConfig, WeightedEdge};
use serde::Serialize;

use crate::cli::{Algorithm, RunArgs};

/// Edges of the built-in demonstration graph.
pub const DEMO_EDGES: [(usize, usize, i64); 9] = [
    (0, 1, 4),
    (0, 2, 3),
    (1, 2, 5),
    (1, 3, 2),
    (2, 3, 7),
    (2, 4, 8),
    (3, 4, 6),
    (3, 5, 1),
    (4, 5, 9),
];

const DEMO_VERTICES: usize = 6;

/// JSON shape of a result graph.
#[derive(Debug, Serialize)]
struct TreeOutput {
    vertices: usize,
    edges: Vec<WeightedEdge>,
    total_weight: i128,
}

impl From<&Graph> for TreeOutput {
    fn from(graph: &Graph) -> Self {
        Self {
            vertices: graph.num_vertices(),
            edges: graph.edges().collect(),
            total_weight: graph.total_weight(),
        }
    }
}

pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Graph Implementation Demonstration")?;
    writeln!(out, "===================================")?;

    writeln!(out, "\nCreating a graph with {DEMO_VERTICES} vertices:")?;
    let mut graph = Graph::new(DEMO_VERTICES)?;
    for (u, v, w) in DEMO_EDGES {
        graph.add_edge(u, v, w)?;
    }

    let sections = [
        ("\nOriginal graph:", graph.clone()),
        ("\nBFS traversal starting from vertex 0:", bfs(&graph, 0)?),
        ("\nDFS traversal starting from vertex 0:", dfs(&graph, 0)?),
        (
            "\nShortest paths from vertex 0 (Dijkstra's algorithm):",
            dijkstra(&graph, 0)?,
        ),
        ("\nMinimum Spanning Tree (Prim's algorithm):", prim(&graph)?),
        (
            "\nMinimum Spanning Tree (Kruskal's algorithm):",
            kruskal(&graph)?,
        ),
    ];
    for (heading, result) in &sections {
        writeln!(out, "{heading}")?;
        result.write_to(out)?;
    }
    Ok(())
}

pub fn run<W: Write>(args: &RunArgs, config: &GraphexConfig, out: &mut W) -> Result<()> {
    let mut graph = Graph::with_limits(args.vertices, &config.limits)
        .context("cannot create graph")?;
    for edge in &args.edges {
        let weight = edge.weight.unwrap_or(config.graph.default_weight);
        graph
            .add_edge(edge.u, edge.v, weight)
            .with_context(|| format!("cannot add edge {},{}", edge.u, edge.v))?;
    }

    if !args.algorithm.uses_source() && args.source != 0 {
        tracing::warn!(
            algorithm = args.algorithm.name(),
            source = args.source,
            "Source vertex is ignored by spanning forest algorithms"
        );
    }
    tracing::info!(
        algorithm = args.algorithm.name(),
        vertices = args.vertices,
        edges = args.edges.len(),
        "Running algorithm"
    );

    let result = match args.algorithm {
        Algorithm::Bfs => bfs(&graph, args.source),
        Algorithm::Dfs => dfs(&graph, args.source),
        Algorithm::Dijkstra => dijkstra(&graph, args.source),
        Algorithm::Prim => prim(&graph),
        Algorithm::Kruskal => kruskal(&graph),
    }
    .with_context(|| format!("{} failed", args.algorithm.name()))?;

    if args.json {
        serde_json::to_writer(&mut *out, &TreeOutput::from(&result))?;
        writeln!(out)?;
    } else {
        result.write_to(out)?;
    }
    Ok(())
}

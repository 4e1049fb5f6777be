//! Command-line argument parsing for the `graphex` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Graphex: spanning trees and shortest paths over undirected weighted graphs.
#[derive(Parser, Debug)]
#[command(name = "graphex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file (defaults to ./graphex.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every algorithm on the built-in 6-vertex graph
    Demo,
    /// Build a graph from the command line and run one algorithm on it
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Algorithm to run
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Number of vertices
    #[arg(short = 'n', long = "vertices")]
    pub vertices: usize,

    /// Edge as `U,V` or `U,V,W` (repeatable); a missing weight uses `graph.default_weight`
    #[arg(short = 'e', long = "edge", value_parser = parse_edge)]
    pub edges: Vec<EdgeSpec>,

    /// Start vertex for bfs, dfs and dijkstra
    #[arg(short = 's', long = "source", default_value_t = 0)]
    pub source: usize,

    /// Print the result as JSON instead of the adjacency dump
    #[arg(long = "json")]
    pub json: bool,
}

/// Algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
}

impl Algorithm {
    pub fn uses_source(self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs | Self::Dijkstra)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

/// One `--edge` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub u: usize,
    pub v: usize,
    pub weight: Option<i64>,
}

fn parse_edge(raw: &str) -> Result<EdgeSpec, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let vertex = |s: &str| {
        s.parse::<usize>()
            .map_err(|e| format!("invalid vertex '{s}': {e}"))
    };
    match parts.as_slice() {
        [u, v] => Ok(EdgeSpec {
            u: vertex(u)?,
            v: vertex(v)?,
            weight: None,
        }),
        [u, v, w] => {
            let weight = w
                .parse::<i64>()
                .map_err(|e| format!("invalid weight '{w}': {e}"))?;
            if weight < 0 {
                return Err(format!(
                    "invalid weight '{w}': negative weights are not supported"
                ));
            }
            Ok(EdgeSpec {
                u: vertex(u)?,
                v: vertex(v)?,
                weight: Some(weight),
            })
        }
        _ => Err(format!("expected U,V or U,V,W, got '{raw}'")),
    }
}

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use topo_container::{PrecedenceGraph, SortOrderMap, SortVec};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// One sort request, read as JSON from a file argument or stdin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SortRequest {
    /// `[before, after]` pairs
    #[serde(default)]
    precede: Vec<(String, String)>,
    /// Sequence contents; duplicates allowed
    #[serde(default)]
    items: Option<Vec<String>>,
    /// Associative contents, kept in document order
    #[serde(default)]
    entries: Option<Map<String, Value>>,
    #[serde(default)]
    check_cycles: bool,
}

fn read_input() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {path}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_edges(graph: &PrecedenceGraph<String>) {
    println!("Precedence edges:");
    for from in graph.sources() {
        println!("  {} -> {:?}", from, graph.successors(from));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let input = read_input()?;
    let req: SortRequest = serde_json::from_str(input.trim()).context("parsing sort request")?;
    let graph: PrecedenceGraph<String> = req.precede.into_iter().collect();
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded precedences"
    );

    let order = if req.check_cycles {
        graph.checked_topological_sort()?
    } else {
        graph.topological_sort()
    };
    println!("Topological order: {:?}", order.into_vec());
    print_edges(&graph);

    match (req.items, req.entries) {
        (Some(_), Some(_)) => bail!("give either `items` or `entries`, not both"),
        (Some(items), None) => {
            let v = SortVec::with_graph(items, graph);
            let sorted = v.sort();
            println!("Sorted ({} of {}): {:?}", sorted.len(), v.len(), sorted);
        }
        (None, Some(entries)) => {
            let m = SortOrderMap::with_graph(entries.into_iter().collect(), graph);
            let sorted = m.sort();
            println!("Sorted ({} of {}):", sorted.len(), m.len());
            for (key, value) in &sorted {
                println!("  {key}: {value}");
            }
        }
        (None, None) => {}
    }
    Ok(())
}

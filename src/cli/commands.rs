//! CLI command implementations.

use serde::Serialize;

use crate::engine::{Trace, TraceEngine, TraceParams, TraceSummary};
use crate::graph::{GraphBuilder, GraphStore};
use crate::types::{
    parse_weight, GraphError, GraphResult, NodeId, Weight, DEFAULT_WEIGHT, MAX_BUILD_NODES,
};

/// Parse an edge argument of the form `A-B` or `A-B:W`.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(NodeId, NodeId, Weight)> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());

    let (pair, weight) = match spec.split_once(':') {
        Some((pair, w)) => (pair, parse_weight(w)?),
        None => (spec, DEFAULT_WEIGHT),
    };
    let (a, b) = pair.split_once('-').ok_or_else(invalid)?;
    let a = a.trim().parse().map_err(|_| invalid())?;
    let b = b.trim().parse().map_err(|_| invalid())?;
    Ok((a, b, weight))
}

/// Build a graph of `node_count` nodes (IDs `0..node_count`) plus the given
/// edge arguments. Nodes referenced by an edge are created even if they lie
/// beyond `node_count`, up to [`MAX_BUILD_NODES`] in total.
pub fn build_graph(node_count: u64, edge_specs: &[String]) -> GraphResult<GraphStore> {
    let mut needed = node_count;
    let mut edges = Vec::with_capacity(edge_specs.len());
    for spec in edge_specs {
        let (a, b, weight) = parse_edge_spec(spec)?;
        let span = a
            .max(b)
            .checked_add(1)
            .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
        needed = needed.max(span);
        edges.push((a, b, weight));
    }
    if needed > MAX_BUILD_NODES {
        return Err(GraphError::TooManyNodes {
            count: needed,
            max: MAX_BUILD_NODES,
        });
    }

    let mut builder = GraphBuilder::with_nodes(needed);
    for &(a, b, weight) in &edges {
        builder.link(a, b, weight);
    }
    builder.build()
}

/// Describe the graph's nodes and edges.
pub fn render_info(graph: &GraphStore, json: bool) -> String {
    if json {
        let adjacency: serde_json::Map<String, serde_json::Value> = graph
            .nodes()
            .into_iter()
            .map(|id| {
                let neighbors = graph.neighbors(id).unwrap_or(&[]);
                (id.to_string(), serde_json::json!(neighbors))
            })
            .collect();
        let info = serde_json::json!({
            "nodes": graph.nodes(),
            "edges": graph.edges(),
            "adjacency": adjacency,
        });
        serde_json::to_string_pretty(&info).unwrap_or_default()
    } else {
        let mut out = String::new();
        out.push_str(&format!("Nodes: {}\n", graph.node_count()));
        out.push_str(&format!("Edges: {}\n", graph.edge_count()));
        for id in graph.nodes() {
            let neighbors: Vec<String> = graph
                .neighbors(id)
                .unwrap_or(&[])
                .iter()
                .map(|(n, w)| format!("{}(w={})", n, w))
                .collect();
            out.push_str(&format!("  {}: {}\n", id, neighbors.join(", ")));
        }
        out
    }
}

/// JSON document printed for a trace. Serialized directly rather than through
/// `serde_json::Value`, which cannot hold distances above `u64::MAX`.
#[derive(Serialize)]
struct TraceReport<'a> {
    trace: &'a Trace,
    summary: TraceSummary,
}

/// Render a trace, one event per line, or as JSON.
pub fn render_trace(trace: &Trace, json: bool) -> String {
    if json {
        let report = TraceReport {
            trace,
            summary: trace.summary(),
        };
        serde_json::to_string_pretty(&report).unwrap_or_default()
    } else {
        let mut out = match trace.end {
            Some(end) => format!("{} from {} to {}:\n", trace.algorithm, trace.start, end),
            None => format!("{} from {}:\n", trace.algorithm, trace.start),
        };
        for event in &trace.events {
            out.push_str(&format!("  {}\n", event));
        }
        out
    }
}

/// Display the graph.
pub fn cmd_info(graph: &GraphStore, json: bool) -> GraphResult<()> {
    print!("{}", render_info(graph, json));
    if json {
        println!();
    }
    Ok(())
}

/// Run one algorithm and print its trace.
pub fn cmd_trace(graph: &GraphStore, params: TraceParams, json: bool) -> GraphResult<()> {
    let trace = TraceEngine::new().run(graph, params)?;
    print!("{}", render_trace(&trace, json));
    if json {
        println!();
    }
    Ok(())
}

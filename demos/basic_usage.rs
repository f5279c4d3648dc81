//! Basic edit -> trace flow.

use graphtrace::*;

fn main() -> GraphResult<()> {
    // Build the graph one edit at a time, the way an interactive host would
    let mut graph = GraphStore::new();
    let mut session = EditSession::new();
    let ids: Vec<NodeId> = (0..4).map(|_| graph.add_node()).collect();

    for (a, b, w) in [(0, 1, "5"), (0, 2, "1"), (2, 1, "1"), (1, 3, "1"), (2, 3, "8")] {
        session.set_weight(w)?;
        session.select_for_edge(&mut graph, ids[a])?;
        session.select_for_edge(&mut graph, ids[b])?;
    }

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let engine = TraceEngine::new();
    for params in [
        TraceParams::bfs(ids[0]),
        TraceParams::dfs(ids[0]),
        TraceParams::dijkstra(ids[0], ids[3]),
    ] {
        let trace = engine.run(&graph, params)?;
        println!("\n{}:", trace.algorithm);
        for event in &trace.events {
            println!("  {}", event);
        }
    }

    // Deleting a node cascades to its edges
    let removed = graph.remove_node(ids[2])?;
    println!("\nRemoved node {} and {} edges", ids[2], removed.len());

    Ok(())
}

//! CLI entry point for the `gtrace` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphtrace::cli::commands;
use graphtrace::engine::TraceParams;
use graphtrace::GraphError;

#[derive(Parser)]
#[command(
    name = "gtrace",
    about = "Build a small undirected graph and trace BFS, DFS or Dijkstra over it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Number of nodes to create (IDs 0..N)
    #[arg(long, default_value = "0")]
    nodes: u64,

    /// Edge as A-B or A-B:WEIGHT (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List nodes, edges and adjacency
    Info,
    /// Breadth-first traversal from a node
    Bfs {
        /// Starting node ID
        start: u64,
    },
    /// Depth-first traversal from a node
    Dfs {
        /// Starting node ID
        start: u64,
    },
    /// Shortest path between two nodes
    Dijkstra {
        /// Starting node ID
        start: u64,
        /// Target node ID
        end: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = commands::build_graph(cli.nodes, &cli.edges).and_then(|graph| match cli.command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Bfs { start } => commands::cmd_trace(&graph, TraceParams::bfs(start), json),
        Commands::Dfs { start } => commands::cmd_trace(&graph, TraceParams::dfs(start), json),
        Commands::Dijkstra { start, end } => {
            commands::cmd_trace(&graph, TraceParams::dijkstra(start, end), json)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidWeight(_)
            | GraphError::InvalidEdgeSpec(_)
            | GraphError::TooManyNodes { .. }
            | GraphError::MissingEndNode(_) => 3,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound(_, _) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

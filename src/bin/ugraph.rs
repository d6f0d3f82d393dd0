//! CLI entry point for the `ugraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use adjacency_graph::cli::commands;
use adjacency_graph::{GraphError, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph — traverse small undirected graphs given on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Register an isolated vertex by label (repeatable)
    #[arg(long = "vertex", value_name = "LABEL", global = true)]
    vertices: Vec<String>,

    /// Link two labels, written A:B (repeatable)
    #[arg(long = "edge", value_name = "A:B", global = true)]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-first traversal from a vertex
    Dfs {
        /// Label of the start vertex
        #[arg(long)]
        start: String,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Label of the start vertex
        #[arg(long)]
        start: String,
    },
    /// Number of edges on the shortest path between two vertices
    Distance {
        /// Label of the start vertex
        #[arg(long)]
        from: String,
        /// Label of the target vertex
        #[arg(long)]
        to: String,
    },
    /// Vertex and edge counts with each vertex's neighbors
    Info,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = commands::load_graph(&cli.vertices, &cli.edges).and_then(|graph| {
        match cli.command {
            Commands::Dfs { start } => {
                commands::cmd_traverse(&graph, &start, TraversalOrder::DepthFirst, json)
            }
            Commands::Bfs { start } => {
                commands::cmd_traverse(&graph, &start, TraversalOrder::BreadthFirst, json)
            }
            Commands::Distance { from, to } => commands::cmd_distance(&graph, &from, &to, json),
            Commands::Info => commands::cmd_info(&graph, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) | GraphError::UnknownLabel(_) => 2,
            GraphError::Unreachable { .. } => 3,
            GraphError::UnknownVertex(_) => 4,
        };
        process::exit(code);
    }
}

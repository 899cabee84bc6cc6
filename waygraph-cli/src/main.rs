//! Waygraph CLI - Command-line interface for Waygraph
//!
//! Builds a weighted graph one vertex and edge at a time, keeps it in a
//! per-directory store, and answers shortest-path questions about it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "waygraph")]
#[command(author = "Waygraph Contributors")]
#[command(version)]
#[command(about = "Weighted graphs and shortest paths from the command line", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the .waygraph workspace
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Waygraph in a directory
    Init {
        /// Path to initialize (defaults to --dir)
        path: Option<PathBuf>,
    },

    /// Add one or more vertices
    AddVertex {
        /// Vertex names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Add an undirected edge, replacing any existing weight
    AddEdge {
        start: String,
        end: String,
        /// Non-negative edge weight
        weight: u64,
    },

    /// List all vertices
    Vertices,

    /// List all edges
    Edges {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Shortest paths from a vertex to every other vertex
    Paths {
        /// Source vertex
        source: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Shortest path between two vertices
    Route { source: String, target: String },

    /// Export the graph to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "waygraph.json")]
        output: PathBuf,
    },

    /// Replace the stored graph with a JSON document
    Import {
        /// Input file
        file: PathBuf,
    },

    /// Show workspace status and statistics
    Status,

    /// Remove the stored graph
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let dir = cli.dir;
    let result = match cli.command {
        Commands::Init { path } => commands::init(path.as_deref().unwrap_or(dir.as_path())),
        Commands::AddVertex { names } => commands::add_vertices(&dir, &names),
        Commands::AddEdge { start, end, weight } => commands::add_edge(&dir, &start, &end, weight),
        Commands::Vertices => commands::vertices(&dir),
        Commands::Edges { json } => commands::edges(&dir, json),
        Commands::Paths { source, json } => commands::paths(&dir, &source, json),
        Commands::Route { source, target } => commands::route(&dir, &source, &target),
        Commands::Export { output } => commands::export(&dir, &output),
        Commands::Import { file } => commands::import(&dir, &file),
        Commands::Status => commands::status(&dir),
        Commands::Clear => commands::clear(&dir),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

//! Gridpath CLI - shortest paths over edge-list graphs
//!
//! Loads a graph from an edge-list file and answers shortest-path
//! queries against it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::GraphArgs;

#[derive(Parser)]
#[command(name = "gridpath")]
#[command(author = "Gridpath Contributors")]
#[command(version)]
#[command(about = "Dijkstra shortest paths over labeled edge lists", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config to .gridpath/config.json
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Find the shortest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node label
        start: String,

        /// Target node label
        target: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show the distance from a node to every reachable node
    Distances {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node label
        start: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics and known nodes
    Nodes {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
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

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Path {
            graph,
            start,
            target,
            json,
        } => commands::path(&graph, &start, &target, json),
        Commands::Distances { graph, start, json } => commands::distances(&graph, &start, json),
        Commands::Nodes { graph, json } => commands::nodes(&graph, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

//! CLI command implementations.

use crate::config::{self, GraphArgs, CONFIG_DIR};
use colored::Colorize;
use gridpath_graph::{GraphBuilder, LoadOptions, PathResult, ShortestPathGraph};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads the graph named by `args`, returning it with the options used.
fn load(args: &GraphArgs) -> Result<(ShortestPathGraph, LoadOptions)> {
    let root = std::env::current_dir()?;
    load_in(args, &root)
}

/// Like [`load`], resolving the default config under `root`.
fn load_in(args: &GraphArgs, root: &Path) -> Result<(ShortestPathGraph, LoadOptions)> {
    let options = config::resolve(args, root)?;

    let start = Instant::now();
    let mut builder = GraphBuilder::new(options);
    builder.load_file(&args.file)?;
    let graph = builder.build();

    info!(
        "Loaded {} ({} nodes, {} edges) in {}ms",
        args.file.display(),
        graph.node_count(),
        graph.edge_count(),
        start.elapsed().as_millis()
    );

    Ok((graph, options))
}

/// Initialize a Gridpath config in a directory.
pub fn init(path: &Path) -> Result<()> {
    let config_path = config::config_path(path);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(path.join(CONFIG_DIR))?;
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&LoadOptions::default())?,
    )?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    println!(
        "  Edit it to change the default {} / {} / {} settings",
        "weighted".cyan(),
        "directed".cyan(),
        "label_case".cyan()
    );

    Ok(())
}

/// Find the shortest path between two nodes.
pub fn path(args: &GraphArgs, start: &str, target: &str, json: bool) -> Result<()> {
    let (graph, options) = load(args)?;
    let start = options.label_case.apply(start);
    let target = options.label_case.apply(target);

    let result = graph.shortest_path(&start, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match &result {
        PathResult::Found { path, total_weight } => {
            println!(
                "{} Shortest path from {} to {}:",
                "✓".green(),
                start.cyan(),
                target.cyan()
            );
            println!();
            let arrow = " -> ".dimmed().to_string();
            println!("  {}", path.join(arrow.as_str()));
            println!();
            println!("  {} {}", "Total weight:".dimmed(), total_weight);
            println!("  {} {}", "Hops:".dimmed(), path.len() - 1);
        }
        PathResult::Unreachable { start, target } => {
            println!(
                "{} {} is not reachable from {}",
                "✗".yellow(),
                target.cyan(),
                start.cyan()
            );
        }
        PathResult::NotFound { missing, known } => {
            println!(
                "{} Unknown node(s): {}",
                "✗".red(),
                missing.join(", ").red()
            );
            println!("  {} [{}]", "Known nodes:".dimmed(), known.join(", "));
        }
    }

    Ok(())
}

/// Print the distance from one node to every reachable node.
pub fn distances(args: &GraphArgs, start: &str, json: bool) -> Result<()> {
    let (graph, options) = load(args)?;
    let start = options.label_case.apply(start);

    let Some(distances) = graph.distances_from(&start)? else {
        println!("{} Unknown node: {}", "✗".red(), start.red());
        println!("  {} [{}]", "Known nodes:".dimmed(), graph.labels().join(", "));
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&distances)?);
        return Ok(());
    }

    println!(
        "{} {} of {} nodes reachable from {}",
        "✓".green(),
        distances.len(),
        graph.node_count(),
        start.cyan()
    );
    println!();

    let width = distances
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    for (label, distance) in distances.iter() {
        println!("  {:<width$}  {}", label, distance, width = width);
    }

    Ok(())
}

/// Show graph statistics and known nodes.
pub fn nodes(args: &GraphArgs, json: bool) -> Result<()> {
    let (graph, _) = load(args)?;

    if json {
        let export = serde_json::json!({
            "stats": graph.stats(),
            "nodes": graph.labels(),
        });
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    let stats = graph.stats();
    println!("{}", "Graph".cyan().bold());
    println!();
    println!("  {} {}", "Nodes:".dimmed(), stats.node_count);
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    println!("  {} {}", "Weighted:".dimmed(), stats.weighted);
    println!("  {} {}", "Directed:".dimmed(), stats.directed);
    println!();

    for label in graph.labels() {
        let out_degree = graph.neighbors(label).map_or(0, |edges| edges.len());
        println!("  {} {}", label, format!("({} out)", out_degree).dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_graph::LabelCase;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(file: PathBuf) -> GraphArgs {
        GraphArgs {
            file,
            unweighted: false,
            undirected: false,
            upper: false,
            config: None,
        }
    }

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();

        let path = config::config_path(dir.path());
        let options = config::read_config(&path).unwrap();
        assert_eq!(options, LoadOptions::default());
    }

    #[test]
    fn test_init_twice_keeps_existing_config() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();

        let path = config::config_path(dir.path());
        fs::write(&path, r#"{"directed": false}"#).unwrap();
        init(dir.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"directed": false}"#);
    }

    #[test]
    fn test_load_uses_config_under_root() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("grid.txt");
        fs::write(&file, "a b 5\nb c 2\n").unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            config::config_path(dir.path()),
            r#"{"directed": false, "label_case": "upper"}"#,
        )
        .unwrap();

        let (graph, options) = load_in(&args(file), dir.path()).unwrap();

        assert_eq!(options.label_case, LabelCase::Upper);
        assert!(!graph.is_directed());
        assert_eq!(graph.labels(), ["A", "B", "C"]);
        assert_eq!(graph.shortest_path("C", "A").unwrap().total_weight(), Some(7));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = load_in(&args(dir.path().join("none.txt")), dir.path()).err().unwrap();

        assert!(err.to_string().contains("none.txt"));
    }
}

//! CLI command implementations.

use crate::config::{workspace_dir, Config};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::path::Path;
use tracing::debug;
use waygraph_graph::{Distance, ShortestPaths, WayGraph};
use waygraph_store::{read_snapshot, write_json, GraphStore};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Opens the store of an initialized workspace.
fn open_store(root: &Path) -> Result<(Config, GraphStore)> {
    if !workspace_dir(root).exists() {
        return Err(format!(
            "Waygraph not initialized in {} (run `waygraph init`)",
            root.display()
        )
        .into());
    }

    let config = Config::load(root)?;
    let db_path = config.database_path(root);
    debug!("Opening store at {}", db_path.display());
    let store = GraphStore::open(&db_path)?;

    Ok((config, store))
}

fn load_graph(root: &Path) -> Result<WayGraph> {
    let (_, store) = open_store(root)?;
    Ok(store.load_or_default()?)
}

/// Initialize Waygraph in a directory.
pub fn init(root: &Path) -> Result<()> {
    if workspace_dir(root).exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    Config::default().save(root)?;

    println!("{} Initialized Waygraph in {}", "✓".green(), root.display());
    println!("  Run {} to start building a graph", "waygraph add-vertex".cyan());

    Ok(())
}

/// Add one or more vertices.
pub fn add_vertices(root: &Path, names: &[String]) -> Result<()> {
    let (_, store) = open_store(root)?;
    let mut graph = store.load_or_default()?;

    let before = graph.vertex_count();
    for name in names {
        graph.add_vertex(name);
    }
    store.save_graph(&graph)?;

    let added = graph.vertex_count() - before;
    println!(
        "{} Added {} vertices ({} already present)",
        "✓".green(),
        added.to_string().cyan(),
        names.len() - added
    );

    Ok(())
}

/// Add or reweight an edge.
pub fn add_edge(root: &Path, start: &str, end: &str, weight: u64) -> Result<()> {
    let (_, store) = open_store(root)?;
    let mut graph = store.load_or_default()?;

    let previous = graph.weight(start, end);
    graph.add_edge(start, end, weight)?;
    store.save_graph(&graph)?;

    match previous {
        Some(old) => println!(
            "{} {} -- {} reweighted {} → {}",
            "✓".green(),
            start.cyan(),
            end.cyan(),
            old,
            weight
        ),
        None => println!(
            "{} {} -- {} ({})",
            "✓".green(),
            start.cyan(),
            end.cyan(),
            weight
        ),
    }

    Ok(())
}

/// List vertices in insertion order.
pub fn vertices(root: &Path) -> Result<()> {
    let graph = load_graph(root)?;

    if graph.is_empty() {
        println!("Graph has no vertices");
        return Ok(());
    }

    for vertex in graph.get_vertices() {
        println!("  {}", vertex.cyan());
    }

    Ok(())
}

/// List each edge once.
pub fn edges(root: &Path, json_output: bool) -> Result<()> {
    let graph = load_graph(root)?;
    let edges = graph.get_edges();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&edges)?);
        return Ok(());
    }

    if edges.is_empty() {
        println!("Graph has no edges");
        return Ok(());
    }

    for edge in &edges {
        println!(
            "  {} -- {} {}",
            edge.start.cyan(),
            edge.end.cyan(),
            format!("({})", edge.weight).dimmed()
        );
    }

    Ok(())
}

/// Shortest distance and path from `source` to every vertex.
pub fn paths(root: &Path, source: &str, json_output: bool) -> Result<()> {
    let graph = load_graph(root)?;
    let result = graph.shortest_paths(source)?;

    print!("{}", render_paths(&result, json_output)?);

    Ok(())
}

fn render_paths(result: &ShortestPaths, json_output: bool) -> Result<String> {
    if json_output {
        return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
    }

    let mut out = String::new();
    writeln!(
        out,
        "{}",
        format!("Shortest paths from {}", result.source()).cyan().bold()
    )?;
    writeln!(out)?;

    for route in result.iter() {
        match route.distance {
            Distance::Reachable(d) => writeln!(
                out,
                "  {} {} {}",
                route.vertex.cyan(),
                d.to_string().bold(),
                route.path.join(" → ").dimmed()
            )?,
            Distance::Unreachable => {
                writeln!(out, "  {} {}", route.vertex.cyan(), "unreachable".red())?
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Reachable: {}/{} | Query time: {}us",
        result.reachable().count(),
        result.len(),
        result.query_time_us
    )?;

    Ok(out)
}

/// One shortest path between two vertices.
pub fn route(root: &Path, source: &str, target: &str) -> Result<()> {
    let graph = load_graph(root)?;
    let result = graph.shortest_paths(source)?;

    print!("{}", render_route(&result, target)?);

    Ok(())
}

fn render_route(result: &ShortestPaths, target: &str) -> Result<String> {
    let route = result
        .get(target)
        .ok_or_else(|| format!("Vertex '{}' not found in graph", target))?;

    let mut out = String::new();
    match route.distance {
        Distance::Reachable(d) => {
            writeln!(out, "{}", route.path.join(" → ").cyan())?;
            writeln!(out, "Distance: {}", d.to_string().bold())?;
        }
        Distance::Unreachable => {
            writeln!(
                out,
                "{} No path from {} to {}",
                "✗".red(),
                result.source().cyan(),
                target.cyan()
            )?;
        }
    }

    Ok(out)
}

/// Export the stored graph to JSON.
pub fn export(root: &Path, output: &Path) -> Result<()> {
    let (config, store) = open_store(root)?;
    let graph = store.load_or_default()?;

    write_json(&graph, output, config.export_pretty)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

/// Replace the stored graph with a JSON document.
pub fn import(root: &Path, file: &Path) -> Result<()> {
    let (_, store) = open_store(root)?;
    let snapshot = read_snapshot(file)?;

    let progress = ProgressBar::new(snapshot.edges.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} edges")?,
    );

    let graph = snapshot.restore_with(|_| progress.inc(1))?;
    progress.finish_and_clear();

    store.save_graph(&graph)?;

    println!(
        "{} Imported {} vertices and {} edges from {}",
        "✓".green(),
        graph.vertex_count().to_string().cyan(),
        graph.edge_count().to_string().cyan(),
        file.display()
    );

    Ok(())
}

/// Show workspace status.
pub fn status(root: &Path) -> Result<()> {
    if !workspace_dir(root).exists() {
        println!("{} Waygraph not initialized in this directory", "✗".red());
        println!("  Run {} to initialize", "waygraph init".cyan());
        return Ok(());
    }

    let (config, store) = open_store(root)?;
    let stats = store.load_or_default()?.stats();

    println!("{}", "Waygraph Status".cyan().bold());
    println!();
    println!("  {} {}", "Database:".dimmed(), config.database_path(root).display());
    println!("  {} {}", "Vertices:".dimmed(), stats.vertex_count);
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    println!("  {} {}", "Isolated:".dimmed(), stats.isolated);

    Ok(())
}

/// Remove the stored graph.
pub fn clear(root: &Path) -> Result<()> {
    let (_, store) = open_store(root)?;
    store.clear()?;
    println!("{} Cleared stored graph", "✓".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use waygraph_graph::EdgeRecord;

    fn names(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_commands_require_init() {
        let dir = tempdir().unwrap();
        assert!(add_vertices(dir.path(), &names(&["A"])).is_err());
        assert!(status(dir.path()).is_ok());
    }

    #[test]
    fn test_mutations_persist() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();
        init(dir.path()).unwrap();

        add_vertices(dir.path(), &names(&["A", "B", "C", "A"])).unwrap();
        add_edge(dir.path(), "A", "B", 1).unwrap();
        add_edge(dir.path(), "B", "C", 4).unwrap();
        add_edge(dir.path(), "C", "B", 2).unwrap();

        let graph = load_graph(dir.path()).unwrap();
        assert_eq!(graph.get_vertices(), vec!["A", "B", "C"]);
        assert_eq!(
            graph.get_edges(),
            vec![EdgeRecord::new("A", "B", 1), EdgeRecord::new("B", "C", 2)]
        );

        assert!(paths(dir.path(), "A", false).is_ok());
        assert!(route(dir.path(), "A", "C").is_ok());
    }

    fn diamond() -> WayGraph {
        let mut graph = WayGraph::new();
        for v in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 5).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        graph
    }

    #[test]
    fn test_render_paths_text() {
        colored::control::set_override(false);
        let result = diamond().shortest_paths("A").unwrap();
        let out = render_paths(&result, false).unwrap();

        assert!(out.starts_with("Shortest paths from A\n"));
        assert!(out.contains("  D 4 A → B → C → D\n"));
        assert!(out.contains("  E unreachable\n"));
        assert!(out.contains("Reachable: 4/5"));
    }

    #[test]
    fn test_render_paths_json() {
        let result = diamond().shortest_paths("A").unwrap();
        let out = render_paths(&result, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["source"], "A");
        assert_eq!(json["routes"][3]["vertex"], "D");
        assert_eq!(json["routes"][3]["distance"], serde_json::json!({ "reachable": 4 }));
        assert_eq!(
            json["routes"][3]["path"],
            serde_json::json!(["A", "B", "C", "D"])
        );
        assert_eq!(json["routes"][4]["distance"], "unreachable");
        assert_eq!(json["routes"][4]["path"], serde_json::json!([]));
    }

    #[test]
    fn test_render_route() {
        colored::control::set_override(false);
        let result = diamond().shortest_paths("A").unwrap();

        assert_eq!(
            render_route(&result, "C").unwrap(),
            "A → B → C\nDistance: 3\n"
        );
        assert_eq!(
            render_route(&result, "E").unwrap(),
            "✗ No path from A to E\n"
        );
        assert!(render_route(&result, "Z").is_err());
    }

    #[test]
    fn test_unknown_vertex_is_error() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();
        add_vertices(dir.path(), &names(&["B"])).unwrap();

        assert!(add_edge(dir.path(), "X", "B", 1).is_err());
        assert!(paths(dir.path(), "X", true).is_err());
        assert!(route(dir.path(), "B", "X").is_err());

        let graph = load_graph(dir.path()).unwrap();
        assert!(graph.get_edges().is_empty());
    }

    #[test]
    fn test_export_import() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("out.json");
        init(dir.path()).unwrap();
        add_vertices(dir.path(), &names(&["A", "B", "E"])).unwrap();
        add_edge(dir.path(), "A", "B", 3).unwrap();
        export(dir.path(), &file).unwrap();

        clear(dir.path()).unwrap();
        assert!(load_graph(dir.path()).unwrap().is_empty());

        import(dir.path(), &file).unwrap();
        let graph = load_graph(dir.path()).unwrap();
        assert_eq!(graph.get_vertices(), vec!["A", "B", "E"]);
        assert_eq!(graph.weight("B", "A"), Some(3));
    }
}

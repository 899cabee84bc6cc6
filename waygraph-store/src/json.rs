//! JSON documents for export and import.
//!
//! The document is a `GraphSnapshot`:
//! `{"vertices": ["A", ...], "edges": [{"start": "A", "end": "B", "weight": 1}]}`

use crate::error::Result;
use crate::snapshot::GraphSnapshot;
use std::fs;
use std::path::Path;
use tracing::debug;
use waygraph_graph::WayGraph;

/// Writes a graph to a JSON file.
pub fn write_json(graph: &WayGraph, path: &Path, pretty: bool) -> Result<()> {
    let snapshot = GraphSnapshot::capture(graph);
    let text = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    fs::write(path, text)?;
    debug!("Wrote graph document to {}", path.display());

    Ok(())
}

/// Reads a JSON file without rebuilding the graph.
pub fn read_snapshot(path: &Path) -> Result<GraphSnapshot> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads a graph from a JSON file.
pub fn read_json(path: &Path) -> Result<WayGraph> {
    read_snapshot(path)?.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use tempfile::tempdir;
    use waygraph_graph::EdgeRecord;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("graph.json");

        let mut graph = WayGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge("A", "B", 9).unwrap();

        write_json(&graph, &file, true).unwrap();
        let loaded = read_json(&file).unwrap();

        assert_eq!(loaded.get_edges(), vec![EdgeRecord::new("A", "B", 9)]);
    }

    #[test]
    fn test_hand_written_document() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("graph.json");
        fs::write(
            &file,
            r#"{"vertices": ["X", "Y", "Z"], "edges": [{"start": "Y", "end": "X", "weight": 2}]}"#,
        )
        .unwrap();

        let graph = read_json(&file).unwrap();
        assert_eq!(graph.get_vertices(), vec!["X", "Y", "Z"]);
        assert_eq!(graph.get_edges(), vec![EdgeRecord::new("X", "Y", 2)]);
    }

    #[test]
    fn test_edges_default_to_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("graph.json");
        fs::write(&file, r#"{"vertices": ["solo"]}"#).unwrap();

        let graph = read_json(&file).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("graph.json");
        fs::write(
            &file,
            r#"{"vertices": ["A", "B"], "edges": [{"start": "A", "end": "B", "weight": -1}]}"#,
        )
        .unwrap();

        assert!(matches!(read_json(&file), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_json(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}

//! Serializable picture of a graph.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;
use waygraph_graph::{EdgeRecord, WayGraph};

/// Vertices and edges of a graph, as its public operations report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Captures a graph through `get_vertices` and `get_edges`.
    pub fn capture(graph: &WayGraph) -> Self {
        Self {
            vertices: graph.get_vertices().into_iter().map(String::from).collect(),
            edges: graph.get_edges(),
        }
    }

    /// Rebuilds the graph.
    ///
    /// An edge naming a vertex that is not listed fails the whole restore.
    pub fn restore(&self) -> Result<WayGraph> {
        self.restore_with(|_| {})
    }

    /// Rebuilds the graph, calling `on_edge` after each edge is added.
    pub fn restore_with<F>(&self, mut on_edge: F) -> Result<WayGraph>
    where
        F: FnMut(&EdgeRecord),
    {
        let mut graph = WayGraph::with_capacity(self.vertices.len(), self.edges.len());

        for vertex in &self.vertices {
            graph.add_vertex(vertex);
        }

        for edge in &self.edges {
            graph.add_edge(&edge.start, &edge.end, edge.weight)?;
            on_edge(edge);
        }

        debug!(
            "Restored graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use waygraph_graph::GraphError;

    fn sample_graph() -> WayGraph {
        let mut graph = WayGraph::new();
        for v in ["A", "B", "C", "E"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph
    }

    #[test]
    fn test_capture_uses_public_view() {
        let snapshot = GraphSnapshot::capture(&sample_graph());

        assert_eq!(snapshot.vertices, vec!["A", "B", "C", "E"]);
        assert_eq!(
            snapshot.edges,
            vec![EdgeRecord::new("A", "B", 1), EdgeRecord::new("B", "C", 2)]
        );
    }

    #[test]
    fn test_restore_keeps_isolated_vertices() {
        let restored = GraphSnapshot::capture(&sample_graph()).restore().unwrap();

        assert_eq!(restored.get_vertices(), vec!["A", "B", "C", "E"]);
        assert_eq!(restored.stats().isolated, 1);
        assert_eq!(restored.weight("C", "B"), Some(2));
    }

    #[test]
    fn test_restore_rejects_unknown_endpoint() {
        let snapshot = GraphSnapshot {
            vertices: vec!["A".to_string()],
            edges: vec![EdgeRecord::new("A", "ghost", 3)],
        };

        match snapshot.restore() {
            Err(StoreError::Graph(GraphError::UnknownVertex(name))) => assert_eq!(name, "ghost"),
            other => panic!("expected unknown vertex, got {:?}", other),
        }
    }

    #[test]
    fn test_restore_with_reports_each_edge() {
        let snapshot = GraphSnapshot::capture(&sample_graph());
        let mut seen = 0;

        snapshot.restore_with(|_| seen += 1).unwrap();

        assert_eq!(seen, 2);
    }
}

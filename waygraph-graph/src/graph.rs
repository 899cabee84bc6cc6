//! Core graph data structure.
//!
//! `WayGraph` wraps a petgraph `UnGraph` and adds a label index, so the
//! rest of the system addresses vertices by name while storage stays
//! index-based. An undirected petgraph edge is a single record seen from
//! both endpoints, which keeps the adjacency relation symmetric.

use crate::edge::{EdgeRecord, Weight};
use crate::error::{GraphError, Result};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Index of a vertex in the underlying arena.
pub type VertexId = NodeIndex;

/// A weighted, undirected graph keyed by vertex label.
#[derive(Debug, Clone, Default)]
pub struct WayGraph {
    /// The underlying petgraph graph. Node weights are the labels.
    pub(crate) graph: UnGraph<String, Weight>,

    /// Maps labels to graph node indexes.
    label_index: HashMap<String, VertexId>,
}

impl WayGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(vertices, edges),
            label_index: HashMap::with_capacity(vertices),
        }
    }

    /// Adds a vertex, or returns the existing one if the label is taken.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&index) = self.label_index.get(name) {
            return index;
        }

        let index = self.graph.add_node(name.to_string());
        self.label_index.insert(name.to_string(), index);
        debug!("Added vertex {}", name);

        index
    }

    /// Adds an undirected edge, replacing the weight if the pair is already
    /// connected.
    ///
    /// Both endpoints must already exist. Nothing is written on error.
    pub fn add_edge(&mut self, start: &str, end: &str, weight: Weight) -> Result<()> {
        let from = self.require(start)?;
        let to = self.require(end)?;

        if from == to {
            return Err(GraphError::SelfLoop(start.to_string()));
        }

        self.graph.update_edge(from, to, weight);
        debug!("Set edge {} -- {} to weight {}", start, end, weight);

        Ok(())
    }

    /// Returns all vertex labels in insertion order.
    pub fn get_vertices(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    /// Returns every undirected edge exactly once.
    ///
    /// Vertices are walked in insertion order and an edge is reported from
    /// whichever endpoint was inserted first, so `start` always precedes
    /// `end` in `get_vertices()`.
    pub fn get_edges(&self) -> Vec<EdgeRecord> {
        let mut edges = Vec::with_capacity(self.graph.edge_count());

        for vertex in self.graph.node_indices() {
            for (neighbor, weight, _) in self.sorted_edges(vertex) {
                if neighbor.index() > vertex.index() {
                    edges.push(EdgeRecord::new(
                        self.graph[vertex].as_str(),
                        self.graph[neighbor].as_str(),
                        weight,
                    ));
                }
            }
        }

        edges
    }

    /// Returns true if a vertex with this label exists.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.label_index.contains_key(name)
    }

    /// Gets the index for a label.
    pub fn get_index(&self, name: &str) -> Option<VertexId> {
        self.label_index.get(name).copied()
    }

    /// Lists a vertex's neighbors with their edge weights, in the order the
    /// edges were created.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>> {
        let index = self.require(name)?;

        Ok(self
            .sorted_edges(index)
            .into_iter()
            .map(|(neighbor, weight, _)| (self.graph[neighbor].as_str(), weight))
            .collect())
    }

    /// Gets the weight of the edge between two vertices, if any.
    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        let from = self.get_index(a)?;
        let to = self.get_index(b)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Resolves a label or fails with `UnknownVertex`.
    pub(crate) fn require(&self, name: &str) -> Result<VertexId> {
        self.get_index(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    /// Edges incident to `vertex` as (neighbor, weight, edge) in creation
    /// order. petgraph yields them most-recent first.
    pub(crate) fn sorted_edges(&self, vertex: VertexId) -> Vec<(VertexId, Weight, EdgeIndex)> {
        let mut incident: Vec<_> = self
            .graph
            .edges(vertex)
            .map(|edge_ref| {
                let neighbor = if edge_ref.source() == vertex {
                    edge_ref.target()
                } else {
                    edge_ref.source()
                };
                (neighbor, *edge_ref.weight(), edge_ref.id())
            })
            .collect();

        incident.sort_by_key(|&(_, _, edge)| edge.index());
        incident
    }
}

/// Graph statistics for status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub isolated: usize,
}

impl WayGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let isolated = self
            .graph
            .node_indices()
            .filter(|&index| self.graph.edges(index).next().is_none())
            .count();

        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            isolated,
        }
    }
}

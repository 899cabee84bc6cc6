//! Waygraph Graph - weighted graph and shortest paths
//!
//! This crate holds the in-memory graph that everything else in Waygraph
//! works with: labeled vertices joined by undirected, non-negatively
//! weighted edges, plus Dijkstra's algorithm for single-source shortest
//! paths over it.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a label index on top, so callers
//! only ever deal in vertex labels. Rendering and persistence live outside
//! this crate and go through the public operations only.
//!
//! # Example
//!
//! ```
//! use waygraph_graph::{Distance, WayGraph};
//!
//! let mut graph = WayGraph::new();
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_edge("A", "B", 4).unwrap();
//!
//! let paths = graph.shortest_paths("A").unwrap();
//! assert_eq!(paths.distance_to("B"), Some(Distance::Reachable(4)));
//! ```

mod dijkstra;
mod edge;
mod error;
mod graph;

pub use dijkstra::{shortest_paths, Distance, Route, ShortestPaths};
pub use edge::{EdgeRecord, PathWeight, Weight};
pub use error::{GraphError, Result};
pub use graph::{GraphStats, VertexId, WayGraph};

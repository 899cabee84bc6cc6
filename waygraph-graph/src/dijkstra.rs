//! Single-source shortest paths.
//!
//! Dijkstra's algorithm over a borrowed `WayGraph`. The frontier is a
//! binary min-heap without decrease-key, so a vertex can sit in it several
//! times; entries that no longer match the vertex's best distance are
//! skipped when popped. Paths are rebuilt from predecessor links once the
//! frontier drains.

use crate::edge::PathWeight;
use crate::error::Result;
use crate::graph::{VertexId, WayGraph};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;
use tracing::{debug, trace};

/// Distance from the source to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Total weight of a shortest path.
    Reachable(PathWeight),
    /// No path connects the vertex to the source.
    Unreachable,
}

impl Distance {
    /// Returns the numeric distance, or None when unreachable.
    pub fn value(&self) -> Option<PathWeight> {
        match self {
            Distance::Reachable(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    /// Returns true unless the vertex is unreachable.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

// Unreachable sorts after every finite distance.
impl Ord for Distance {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Distance::Reachable(a), Distance::Reachable(b)) => a.cmp(b),
            (Distance::Reachable(_), Distance::Unreachable) => std::cmp::Ordering::Less,
            (Distance::Unreachable, Distance::Reachable(_)) => std::cmp::Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => std::cmp::Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Reachable(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Shortest route from the source to one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The destination vertex.
    pub vertex: String,
    /// Total weight of the route.
    pub distance: Distance,
    /// Vertices from the source to `vertex`, both included.
    /// Empty when the vertex is unreachable.
    pub path: Vec<String>,
}

/// Shortest routes from one source to every vertex of a graph.
///
/// Owns all of its data, so it stays valid after the graph changes.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    source: String,
    /// One route per vertex, in the graph's vertex order.
    routes: Vec<Route>,
    #[serde(skip)]
    by_vertex: HashMap<String, usize>,
    /// Time taken in microseconds.
    pub query_time_us: u64,
}

impl ShortestPaths {
    /// The vertex the routes start from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Gets the route to a vertex.
    pub fn get(&self, vertex: &str) -> Option<&Route> {
        self.by_vertex.get(vertex).map(|&i| &self.routes[i])
    }

    /// Gets the distance to a vertex.
    pub fn distance_to(&self, vertex: &str) -> Option<Distance> {
        self.get(vertex).map(|route| route.distance)
    }

    /// Gets the path to a vertex, source first.
    pub fn path_to(&self, vertex: &str) -> Option<&[String]> {
        self.get(vertex).map(|route| route.path.as_slice())
    }

    /// Iterates over all routes in vertex insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Iterates over routes to vertices the source can reach.
    pub fn reachable(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| route.distance.is_reachable())
    }

    /// Returns the number of routes, one per vertex.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl WayGraph {
    /// Computes shortest routes from `source` to every vertex.
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPaths> {
        shortest_paths(self, source)
    }
}

/// Runs Dijkstra's algorithm from `source`.
///
/// Fails with `UnknownVertex` if `source` is not in the graph.
pub fn shortest_paths(graph: &WayGraph, source: &str) -> Result<ShortestPaths> {
    let started = Instant::now();
    let start = graph.require(source)?;

    let n = graph.vertex_count();
    let mut best: Vec<Option<PathWeight>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut frontier: BinaryHeap<Reverse<(PathWeight, VertexId)>> = BinaryHeap::new();

    best[start.index()] = Some(0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((dist, current))) = frontier.pop() {
        if best[current.index()].is_some_and(|known| dist > known) {
            trace!("Skipping stale entry for {:?} at {}", current, dist);
            continue;
        }

        for (neighbor, weight, _) in graph.sorted_edges(current) {
            let candidate = dist + PathWeight::from(weight);
            let improves = match best[neighbor.index()] {
                Some(known) => candidate < known,
                None => true,
            };

            if improves {
                trace!("Relaxed {:?} to {} via {:?}", neighbor, candidate, current);
                best[neighbor.index()] = Some(candidate);
                parent[neighbor.index()] = Some(current);
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let mut routes = Vec::with_capacity(n);
    let mut by_vertex = HashMap::with_capacity(n);

    for index in graph.graph.node_indices() {
        let label = graph.graph[index].clone();
        let (distance, path) = match best[index.index()] {
            Some(d) => (
                Distance::Reachable(d),
                reconstruct_path(graph, &parent, start, index),
            ),
            None => (Distance::Unreachable, Vec::new()),
        };

        by_vertex.insert(label.clone(), routes.len());
        routes.push(Route {
            vertex: label,
            distance,
            path,
        });
    }

    let elapsed = started.elapsed().as_micros() as u64;
    debug!(
        "Shortest paths from {}: {} of {} vertices reachable in {}us",
        source,
        best.iter().filter(|d| d.is_some()).count(),
        n,
        elapsed
    );

    Ok(ShortestPaths {
        source: source.to_string(),
        routes,
        by_vertex,
        query_time_us: elapsed,
    })
}

/// Walk parent pointers from `node` back to `start`, returning labels in
/// source-to-node order.
fn reconstruct_path(
    graph: &WayGraph,
    parent: &[Option<VertexId>],
    start: VertexId,
    node: VertexId,
) -> Vec<String> {
    let mut path = vec![graph.graph[node].clone()];
    let mut current = node;

    while current != start {
        match parent[current.index()] {
            Some(prev) => {
                path.push(graph.graph[prev].clone());
                current = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

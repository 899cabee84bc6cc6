//! Edge types for the weighted graph.
//!
//! Edges themselves live inside petgraph as bare weights. What leaves the
//! graph is an `EdgeRecord`: both endpoint labels plus the weight, which is
//! what listings and exports need.

use serde::{Deserialize, Serialize};

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u64;

/// Total weight of a path. Wide enough that sums of `Weight`s never wrap.
pub type PathWeight = u128;

/// An undirected edge as reported by `WayGraph::get_edges`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub start: String,
    pub end: String,
    pub weight: Weight,
}

impl EdgeRecord {
    /// Creates a new edge record.
    pub fn new(start: impl Into<String>, end: impl Into<String>, weight: Weight) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
        }
    }
}

impl std::fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ({})", self.start, self.end, self.weight)
    }
}

use thiserror::Error;

/// Errors raised by graph mutations and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint or a shortest-path source is not in the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Both endpoints of an edge are the same vertex.
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

use thiserror::Error;
use waygraph_graph::GraphError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid graph data: {0}")]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

use crate::error::Result;
use crate::snapshot::GraphSnapshot;
use sled::Db;
use std::path::Path;
use tracing::info;
use waygraph_graph::WayGraph;

const GRAPH_KEY: &str = "main_graph";

pub struct GraphStore {
    db: Db,
}

impl GraphStore {
    /// Opens or creates a graph store at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Saves the entire graph to the store.
    ///
    /// The graph's snapshot is serialized using bincode and stored under a
    /// fixed key, replacing whatever was saved before.
    pub fn save_graph(&self, graph: &WayGraph) -> Result<()> {
        let bytes = bincode::serialize(&GraphSnapshot::capture(graph))?;
        self.db.insert(GRAPH_KEY, bytes)?;
        self.db.flush()?;
        info!(
            "Saved graph ({} vertices, {} edges)",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }

    /// Loads the graph from the store.
    pub fn load_graph(&self) -> Result<Option<WayGraph>> {
        match self.db.get(GRAPH_KEY)? {
            Some(bytes) => {
                let snapshot: GraphSnapshot = bincode::deserialize(&bytes)?;
                Ok(Some(snapshot.restore()?))
            }
            None => Ok(None),
        }
    }

    /// Loads the saved graph, or an empty one if nothing was saved yet.
    pub fn load_or_default(&self) -> Result<WayGraph> {
        Ok(self.load_graph()?.unwrap_or_default())
    }

    /// Clears the stored graph.
    pub fn clear(&self) -> Result<()> {
        self.db.remove(GRAPH_KEY)?;
        self.db.flush()?;
        Ok(())
    }
}

//! Waygraph Store - graph persistence
//!
//! Saves and loads `WayGraph`s without reaching into their internals: a
//! graph is captured as a `GraphSnapshot` (its vertex list and deduplicated
//! edge list) and rebuilt by replaying `add_vertex` and `add_edge`.
//!
//! Two backends share the snapshot shape:
//! - `GraphStore`, a sled database holding one bincode-encoded graph
//! - plain JSON documents for export and import

mod error;
mod json;
mod snapshot;
mod store;

pub use error::{Result, StoreError};
pub use json::{read_json, read_snapshot, write_json};
pub use snapshot::GraphSnapshot;
pub use store::GraphStore;

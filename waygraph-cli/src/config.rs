//! Per-directory configuration stored in `.waygraph/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory holding config and database.
pub const WORKSPACE_DIR: &str = ".waygraph";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,
    /// sled database directory, relative to the workspace directory.
    pub database: String,
    /// Pretty-print exported JSON.
    pub export_pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            database: "graph.db".to_string(),
            export_pretty: true,
        }
    }
}

impl Config {
    /// Loads the config under `root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = workspace_dir(root).join(CONFIG_FILE);
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the config under `root`, creating the workspace directory.
    pub fn save(&self, root: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let dir = workspace_dir(root);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(CONFIG_FILE), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Location of the sled database for the workspace at `root`.
    pub fn database_path(&self, root: &Path) -> PathBuf {
        workspace_dir(root).join(&self.database)
    }
}

pub fn workspace_dir(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR)
}

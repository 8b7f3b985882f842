//! Shared context for running CLI commands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use streem_config::Config;
use streem_graph::{Node, NodeStore};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
    /// Node list file in use.
    pub store_path: PathBuf,
}

impl CommandContext {
    /// Loads the working directory and configuration.
    ///
    /// `store_override` replaces the configured node list path.
    pub fn load(store_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        let store_path = match store_override {
            Some(path) => cwd.join(path),
            None => config.store_path(&cwd),
        };
        debug!(store = %store_path.display(), "context loaded");
        Ok(Self {
            cwd,
            config,
            store_path,
        })
    }

    /// Reads the node list and checks its integrity.
    pub fn store(&self) -> Result<NodeStore, ExitCode> {
        let nodes = read_nodes(&self.store_path)?;
        let store = NodeStore::new(nodes);
        store.check_integrity().map_err(|e| {
            eprintln!("error: {}: {e}", self.store_path.display());
            ExitCode::FAILURE
        })?;
        Ok(store)
    }

    /// Writes the node list back to the store file.
    pub fn save(&self, nodes: &[Node]) -> Result<(), ExitCode> {
        write_nodes(&self.store_path, nodes)
    }
}

/// Parses a JSON node list from disk.
fn read_nodes(path: &Path) -> Result<Vec<Node>, ExitCode> {
    let contents = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", path.display());
        eprintln!("Run 'streem init' to create an empty node list.");
        ExitCode::FAILURE
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        eprintln!("error: failed to parse {}: {e}", path.display());
        ExitCode::FAILURE
    })
}

/// Serializes a node list to disk as pretty JSON.
pub fn write_nodes(path: &Path, nodes: &[Node]) -> Result<(), ExitCode> {
    let mut json = serde_json::to_string_pretty(nodes).map_err(|e| {
        eprintln!("error: failed to serialize nodes: {e}");
        ExitCode::FAILURE
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|e| {
        eprintln!("error: failed to write {}: {e}", path.display());
        ExitCode::FAILURE
    })
}

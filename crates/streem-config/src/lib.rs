//! Configuration system for streem.
//!
//! streem reads TOML files named `.streem.toml`. Files are discovered by
//! walking up from the working directory; `~/.streem.toml` comes last with the
//! lowest precedence. Every setting is optional and falls back to a default.
//!
//! The view window cap, the minimum stem length and the minimum search group
//! size are fixed and cannot be configured.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawSearchSettings, RawStoreSettings, RawViewSettings, parse_config_file,
    parse_config_str,
};
pub use templates::local_template;

/// Default node list filename.
pub const DEFAULT_STORE_FILENAME: &str = "streem.json";

/// Fully merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where the node list lives.
    pub store: StoreSettings,
    /// Windowed view settings.
    pub view: ViewSettings,
    /// Search settings.
    pub search: SearchSettings,
    /// Directory of the highest-precedence config file, if any.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Discovers, parses and merges every config file relevant to `cwd`.
    ///
    /// Returns `Config::default()` when no file is found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Loads configuration from specific files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        merge_configs(&parsed)
    }

    /// Returns the node list path, defaulting to `streem.json` in `cwd`.
    pub fn store_path(&self, cwd: &Path) -> PathBuf {
        self.store
            .path
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_STORE_FILENAME))
    }
}

/// Store location settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Node list path, already resolved against its config file.
    pub path: Option<PathBuf>,
}

/// Windowed view settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    /// Initial number of trailing notes shown.
    pub limit: usize,
    /// Page size for loading more notes.
    pub step: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            limit: 100,
            step: 100,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Stemming language.
    pub stemmer: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            stemmer: String::from("english"),
        }
    }
}

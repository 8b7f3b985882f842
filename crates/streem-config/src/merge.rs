//! Configuration merging.
//!
//! Folds parsed files into one [`Config`]. Configs arrive highest precedence
//! first; each scalar takes the first value any file defines.

use std::path::{Path, PathBuf};

use crate::{Config, ConfigError, parse::RawConfig};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single `Config`.
///
/// Relative store paths resolve against the directory of the declaring file.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    let mut result = Config::default();

    // Lowest precedence first, so closer files overwrite.
    for parsed in configs.iter().rev() {
        let dir = parsed.path.parent().unwrap_or(Path::new(""));
        let raw = &parsed.config;

        if let Some(path) = raw.store.as_ref().and_then(|s| s.path.as_deref()) {
            result.store.path = Some(dir.join(path));
        }
        if let Some(view) = &raw.view {
            if let Some(limit) = view.limit {
                result.view.limit = limit;
            }
            if let Some(step) = view.step {
                if step == 0 {
                    return Err(ConfigError::InvalidSetting {
                        path: parsed.path.clone(),
                        key: "view.step",
                        reason: "must be greater than zero",
                    });
                }
                result.view.step = step;
            }
        }
        if let Some(stemmer) = raw.search.as_ref().and_then(|s| s.stemmer.as_ref()) {
            result.search.stemmer.clone_from(stemmer);
        }
    }

    result.config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);
    Ok(result)
}

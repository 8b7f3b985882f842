//! Configuration file parsing.
//!
//! Parses individual `.streem.toml` files into `RawConfig` values whose
//! fields are all optional, ready for merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here.
    pub root: Option<bool>,
    /// Store section.
    pub store: Option<RawStoreSettings>,
    /// View section.
    pub view: Option<RawViewSettings>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
}

/// Raw store settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawStoreSettings {
    /// Node list path, relative to the declaring file.
    pub path: Option<String>,
}

/// Raw view settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawViewSettings {
    /// Initial number of trailing notes.
    pub limit: Option<usize>,
    /// Page size for loading more notes.
    pub step: Option<usize>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Stemming language.
    pub stemmer: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.store.is_none());
        assert!(config.view.is_none());
        assert!(config.search.is_none());
    }

    #[test]
    fn parse_all_sections() {
        let toml = r#"
root = true

[store]
path = "notes/streem.json"

[view]
limit = 50
step = 25

[search]
stemmer = "german"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(
            config.store.unwrap().path.as_deref(),
            Some("notes/streem.json")
        );
        let view = config.view.unwrap();
        assert_eq!(view.limit, Some(50));
        assert_eq!(view.step, Some(25));
        assert_eq!(config.search.unwrap().stemmer.as_deref(), Some("german"));
    }

    #[test]
    fn parse_partial_section() {
        let config = parse_config_str("[view]\nstep = 10\n", Path::new("t.toml")).unwrap();
        let view = config.view.unwrap();
        assert!(view.limit.is_none());
        assert_eq!(view.step, Some(10));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config_str("[view]\nwindow = 10\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = parse_config_str("[view]\nlimit = \"many\"\n", Path::new("t.toml"));
        assert!(err.is_err());
    }
}

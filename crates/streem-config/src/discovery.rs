//! Configuration file discovery.
//!
//! Walks up the directory tree from a starting point collecting `.streem.toml`
//! files, then appends the global `~/.streem.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".streem.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global last.
/// A file with `root = true` ends the walk and suppresses the global file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                return configs;
            }
        }
        current = dir.parent();
    }

    if let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.streem.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Writes a config file in `rel_path` below `root` and returns its path.
    fn write_config(root: &Path, rel_path: &str, content: &str) -> PathBuf {
        let dir = root.join(rel_path);
        fs::create_dir_all(&dir).unwrap();
        let config = dir.join(CONFIG_FILENAME);
        fs::write(&config, content).unwrap();
        config
    }

    #[test]
    fn finds_configs_closest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = write_config(tmp.path(), "a", "root = true\n");
        let inner = write_config(tmp.path(), "a/b", "");
        let start = tmp.path().join("a/b/c");
        fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_config_files(&start), vec![inner, outer]);
    }

    #[test]
    fn root_config_stops_the_walk() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "", "");
        let inner = write_config(tmp.path(), "x", "root = true\n");

        assert_eq!(discover_config_files(&tmp.path().join("x")), vec![inner]);
    }

    #[test]
    fn unparseable_config_is_not_root() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = write_config(tmp.path(), "", "root = true\n");
        let inner = write_config(tmp.path(), "x", "not = [valid");

        assert_eq!(
            discover_config_files(&tmp.path().join("x")),
            vec![inner, outer]
        );
    }
}

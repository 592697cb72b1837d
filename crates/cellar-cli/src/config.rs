//! Configuration for the cellar CLI
//!
//! Loaded from `<config dir>/cellar/config.toml` when present; every field
//! has a sensible default so a missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the Brewfile lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

fn default_manifest_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Brewfile")
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

/// Where the metadata cache database lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cellar")
        .join("cache.sqlite")
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

/// The external query command that produces package metadata JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_query_command")]
    pub command: String,
    #[serde(default = "default_query_args")]
    pub args: Vec<String>,
}

fn default_query_command() -> String {
    "brew".to_string()
}

fn default_query_args() -> Vec<String> {
    vec!["info".into(), "--json=v1".into(), "--all".into()]
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            command: default_query_command(),
            args: default_query_args(),
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Config {
    /// The default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cellar")
            .join("config.toml")
    }

    /// Load the config from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        let config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[manifest]\npath = \"/tmp/Brewfile\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.manifest.path, PathBuf::from("/tmp/Brewfile"));
        assert_eq!(config.query.command, "brew");
        assert_eq!(config.query.args, vec!["info", "--json=v1", "--all"]);
    }

    #[test]
    fn full_file_overrides_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[manifest]
path = "/tmp/Brewfile"

[cache]
path = "/tmp/cache.sqlite"

[query]
command = "cat"
args = ["/tmp/info.json"]
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.cache.path, PathBuf::from("/tmp/cache.sqlite"));
        assert_eq!(config.query.command, "cat");
        assert_eq!(config.query.args, vec!["/tmp/info.json"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml [").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}

//! Package metadata records as reported by the external query tool
//!
//! The shapes here mirror the JSON emitted by `brew info --json=v1`. Every
//! optional field defaults to empty so partial records still decode.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version information for a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Versions {
    #[serde(default)]
    pub stable: String,
    #[serde(default)]
    pub bottle: bool,
    #[serde(default)]
    pub devel: String,
    #[serde(default)]
    pub head: String,
}

/// A runtime dependency recorded for an installed keg
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeDependency {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub version: String,
}

/// One installed keg of a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstalledKeg {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub used_options: Vec<String>,
    #[serde(default)]
    pub built_as_bottle: bool,
    #[serde(default)]
    pub poured_from_bottle: bool,
    #[serde(default)]
    pub runtime_dependencies: Vec<RuntimeDependency>,
    #[serde(default)]
    pub installed_as_dependency: bool,
    #[serde(default)]
    pub installed_on_request: bool,
}

/// A non-formula requirement of a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default_formula: String,
    #[serde(default)]
    pub cask: String,
    #[serde(default)]
    pub download: String,
}

/// An install option a package accepts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageOption {
    #[serde(default)]
    pub option: String,
    #[serde(default)]
    pub description: String,
}

/// A prebuilt bottle artifact for one platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottleFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sha256: String,
}

/// Bottle metadata for the stable version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottleSpec {
    #[serde(default)]
    pub rebuild: i64,
    #[serde(default)]
    pub cellar: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub root_url: String,
    /// Platform name to bottle artifact
    #[serde(default)]
    pub files: BTreeMap<String, BottleFile>,
}

/// Bottle information for a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    #[serde(default)]
    pub stable: BottleSpec,
}

/// One package's metadata record.
///
/// Identity is `full_name`, which is also the cache key. Records are
/// replaced wholesale on each refresh; they are never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub oldname: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub versions: Versions,
    #[serde(default)]
    pub revision: i64,
    #[serde(default)]
    pub version_scheme: i64,
    #[serde(default)]
    pub installed: Vec<InstalledKeg>,
    #[serde(default)]
    pub linked_keg: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub outdated: bool,
    #[serde(default)]
    pub keg_only: bool,
    /// Required dependencies, by full name
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub recommended_dependencies: Vec<String>,
    #[serde(default)]
    pub optional_dependencies: Vec<String>,
    #[serde(default)]
    pub build_dependencies: Vec<String>,
    #[serde(default)]
    pub conflicts_with: Vec<String>,
    #[serde(default)]
    pub caveats: String,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default)]
    pub options: Vec<PackageOption>,
    #[serde(default)]
    pub bottle: Bottle,
}

/// An in-memory collection of metadata records loaded from a raw JSON
/// capture on disk.
///
/// Reading a snapshot never touches the persistent cache; it exists for
/// callers that want package info without re-invoking the query tool.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<PackageInfo>,
}

impl Snapshot {
    /// Load a snapshot from a file containing a JSON array of records.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let records: Vec<PackageInfo> = serde_json::from_slice(&bytes)?;
        tracing::debug!(count = records.len(), path = %path.display(), "loaded snapshot");
        Ok(Self { records })
    }

    /// Look up a record by full name.
    pub fn find(&self, full_name: &str) -> Result<&PackageInfo> {
        self.records
            .iter()
            .find(|info| info.full_name == full_name)
            .ok_or_else(|| Error::not_found(full_name))
    }

    pub fn records(&self) -> &[PackageInfo] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Shared test fixtures for cellar crates
//!
//! [`TestCache`] provides a throwaway SQLite metadata cache and
//! [`TestBrewfile`] a throwaway manifest file, both with small assertion
//! helpers so test scenarios stay declarative.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use cellar_brew::{MetadataStore, PackageInfo, SqliteStore};

/// A temporary SQLite metadata cache seeded with test records.
pub struct TestCache {
    temp_dir: TempDir,
    store: SqliteStore,
}

impl TestCache {
    /// Create an empty cache in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestCache: failed to create temp dir");
        let store = SqliteStore::open(&temp_dir.path().join("cache.sqlite"))
            .expect("TestCache: failed to open store");
        Self { temp_dir, store }
    }

    /// Path to the cache database file.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("cache.sqlite")
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Insert dependency-free records for each name.
    pub fn add_brews_by_name(&self, names: &[&str]) {
        for name in names {
            self.insert(brew_named(name));
        }
    }

    /// Insert one record as-is.
    pub fn insert(&self, info: PackageInfo) {
        self.store
            .put(&info)
            .expect("TestCache: failed to insert record");
    }
}

impl Default for TestCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a dependency-free record for `name`.
pub fn brew_named(name: &str) -> PackageInfo {
    PackageInfo {
        name: name.to_string(),
        full_name: name.to_string(),
        ..PackageInfo::default()
    }
}

/// Build a record for `name` with the given dependency lists.
pub fn brew_with_deps(
    name: &str,
    required: &[&str],
    recommended: &[&str],
    optional: &[&str],
    build: &[&str],
) -> PackageInfo {
    let to_vec = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
    PackageInfo {
        dependencies: to_vec(required),
        recommended_dependencies: to_vec(recommended),
        optional_dependencies: to_vec(optional),
        build_dependencies: to_vec(build),
        ..brew_named(name)
    }
}

/// A temporary Brewfile with content assertions.
pub struct TestBrewfile {
    temp_dir: TempDir,
}

impl TestBrewfile {
    /// Create a Brewfile with the given contents in a fresh temporary
    /// directory.
    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("TestBrewfile: failed to create temp dir");
        let file = Self { temp_dir };
        fs::write(file.path(), contents).expect("TestBrewfile: failed to write contents");
        file
    }

    /// Path to the Brewfile.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("Brewfile")
    }

    /// A path in the same directory that does not exist yet.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Read the current contents back.
    pub fn contents(&self) -> String {
        fs::read_to_string(self.path()).expect("TestBrewfile: failed to read contents")
    }

    /// Assert that the file contains `needle`.
    ///
    /// # Panics
    /// Panics with a descriptive message when it does not.
    pub fn assert_contains(&self, needle: &str) {
        let contents = self.contents();
        assert!(
            contents.contains(needle),
            "Brewfile does not contain expected content.\nExpected: {}\nActual: {}",
            needle,
            contents
        );
    }

    /// Assert that the file does **not** contain `needle`.
    ///
    /// # Panics
    /// Panics with a descriptive message when it does.
    pub fn assert_not_contains(&self, needle: &str) {
        let contents = self.contents();
        assert!(
            !contents.contains(needle),
            "Brewfile contains unexpected content.\nUnexpected: {}\nActual: {}",
            needle,
            contents
        );
    }

    /// Assert that the file's contents equal `expected` exactly.
    pub fn assert_eq(&self, expected: &str) {
        assert_eq!(self.contents(), expected);
    }
}

/// Keep the temp dir accessible for callers that need extra files.
impl AsRef<Path> for TestBrewfile {
    fn as_ref(&self) -> &Path {
        self.temp_dir.path()
    }
}

//! Persistent key-value cache for package metadata
//!
//! The cache maps package full names to JSON-serialized [`PackageInfo`]
//! records inside a single `brew` bucket. Refresh overwrites the value for
//! a key; stale keys are never deleted automatically, so the cache can
//! hold entries that no longer exist upstream.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Error, Result};
use crate::info::PackageInfo;

/// Name of the single cache bucket.
pub const BUCKET: &str = "brew";

/// Capability over the metadata cache.
///
/// All operations are synchronous and run one transaction at a time. A
/// read never observes a partial write; each `put` commits independently,
/// so a bulk refresh is not atomic as a whole.
pub trait MetadataStore {
    /// Create the cache bucket if it does not exist yet.
    fn ensure_bucket(&self) -> Result<()>;

    /// Write one record keyed by its full name, in its own transaction.
    fn put(&self, info: &PackageInfo) -> Result<()>;

    /// Point lookup by full name.
    ///
    /// Fails with [`Error::PackageNotFound`] when the key is absent, which
    /// is the signal that the cache is stale and needs a refresh.
    fn get(&self, full_name: &str) -> Result<PackageInfo>;
}

/// SQLite-backed cache store.
///
/// The bucket is one table of `key TEXT PRIMARY KEY, value TEXT` rows.
pub struct SqliteStore {
    conn: RefCell<Connection>,
}

impl SqliteStore {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        let conn =
            Connection::open(path).map_err(|e| Error::transaction("open", e))?;
        let store = Self {
            conn: RefCell::new(conn),
        };
        store.ensure_bucket()?;
        Ok(store)
    }
}

impl MetadataStore for SqliteStore {
    fn ensure_bucket(&self) -> Result<()> {
        self.conn
            .borrow()
            .execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {BUCKET} (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );"
            ))
            .map_err(|e| Error::transaction("create bucket", e))
    }

    fn put(&self, info: &PackageInfo) -> Result<()> {
        let value = serde_json::to_string(info)?;
        let mut conn = self.conn.borrow_mut();
        let tx = conn
            .transaction()
            .map_err(|e| Error::transaction("begin write", e))?;
        tx.execute(
            &format!("INSERT OR REPLACE INTO {BUCKET} (key, value) VALUES (?1, ?2)"),
            params![info.full_name, value],
        )
        .map_err(|e| Error::transaction("write record", e))?;
        tx.commit()
            .map_err(|e| Error::transaction("commit write", e))?;
        tracing::debug!(key = %info.full_name, "cached package info");
        Ok(())
    }

    fn get(&self, full_name: &str) -> Result<PackageInfo> {
        let value: Option<String> = self
            .conn
            .borrow()
            .query_row(
                &format!("SELECT value FROM {BUCKET} WHERE key = ?1"),
                params![full_name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| Error::transaction("read record", e))?;

        match value {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Err(Error::not_found(full_name)),
        }
    }
}

/// In-memory store substitute for tests and dry experimentation.
///
/// Keeps the same serialize-on-put contract as [`SqliteStore`] so encoding
/// mistakes surface in either implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl MetadataStore for MemoryStore {
    fn ensure_bucket(&self) -> Result<()> {
        Ok(())
    }

    fn put(&self, info: &PackageInfo) -> Result<()> {
        let value = serde_json::to_string(info)?;
        self.records
            .borrow_mut()
            .insert(info.full_name.clone(), value);
        Ok(())
    }

    fn get(&self, full_name: &str) -> Result<PackageInfo> {
        match self.records.borrow().get(full_name) {
            Some(value) => Ok(serde_json::from_str(value)?),
            None => Err(Error::not_found(full_name)),
        }
    }
}

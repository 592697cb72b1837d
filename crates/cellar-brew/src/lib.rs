//! Package metadata cache and dependency resolution for cellar
//!
//! This crate is the core of the manifest manager: it fetches package
//! metadata from an external query tool ([`fetch`]), persists it in a
//! key-value cache keyed by package full name ([`store`]), and resolves
//! the dependency closure of a requested package into manifest entries
//! ([`resolve`], [`entry`]).
//!
//! Everything is synchronous and single-threaded; the store is passed
//! explicitly into every operation rather than held as a global.

pub mod entry;
pub mod error;
pub mod fetch;
pub mod info;
pub mod resolve;
pub mod store;

pub use entry::{Entry, RestartService};
pub use error::{Error, Result};
pub use fetch::{refresh, BrewQuery, QueryRunner, Refreshed};
pub use info::{PackageInfo, Snapshot};
pub use resolve::{CacheMap, ExpansionPolicy};
pub use store::{MemoryStore, MetadataStore, SqliteStore, BUCKET};

//! Dependency graph resolution against the metadata cache
//!
//! Given the entries already declared in the manifest plus one requested
//! package, [`CacheMap`] computes the set of manifest entries implied by
//! the selected expansion policy. Traversal uses an explicit work-list and
//! the resolution map itself as the visited set, so diamonds collapse to a
//! single entry and cycles terminate.

use std::collections::{BTreeMap, VecDeque};

use crate::entry::Entry;
use crate::error::Result;
use crate::store::MetadataStore;

/// How far dependency traversal extends from the requested package.
///
/// Chosen once per add invocation from CLI flags; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionPolicy {
    /// Just the requested package, no traversal
    #[default]
    PackageOnly,
    /// The required-dependency list, transitively
    PackageAndRequired,
    /// Required, recommended, optional, and build lists, transitively
    All,
}

/// Resolution map for one add invocation.
///
/// Holds at most one entry per full name. Owned exclusively by the
/// invocation that built it and discarded after rendering.
pub struct CacheMap<'a, S: MetadataStore> {
    store: &'a S,
    entries: BTreeMap<String, Entry>,
}

impl<'a, S: MetadataStore> CacheMap<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            entries: BTreeMap::new(),
        }
    }

    /// Seed the map with the entries already declared in the manifest.
    ///
    /// Seeding is lazy: the cache is not consulted here. A seeded name
    /// missing from the cache only becomes an error if traversal later
    /// reaches it.
    pub fn from_entries(store: &'a S, seed: Vec<Entry>) -> Self {
        let mut map = Self::new(store);
        for entry in seed {
            map.entries.insert(entry.name.clone(), entry);
        }
        map
    }

    /// Insert `entry` and expand its dependencies under `policy`.
    ///
    /// The requested entry always overwrites any existing entry for the
    /// same name, so a fresh add can update args or restart mode for a
    /// package previously pulled in as a dependency. Discovered
    /// dependencies are inserted as bare entries only when absent;
    /// first-seen wins, so explicit args survive later discovery.
    ///
    /// Fails with [`crate::Error::PackageNotFound`] if any traversed name
    /// has no cache record. The map may be partially extended at that
    /// point; callers must discard it without writing the manifest.
    pub fn add(&mut self, entry: Entry, policy: ExpansionPolicy) -> Result<()> {
        let mut pending = VecDeque::new();
        pending.push_back(entry.name.clone());
        self.entries.insert(entry.name.clone(), entry);

        if policy == ExpansionPolicy::PackageOnly {
            return Ok(());
        }

        while let Some(name) = pending.pop_front() {
            let info = self.store.get(&name)?;
            tracing::debug!(package = %name, "expanding dependencies");

            let mut deps: Vec<&String> = info.dependencies.iter().collect();
            if policy == ExpansionPolicy::All {
                deps.extend(info.recommended_dependencies.iter());
                deps.extend(info.optional_dependencies.iter());
                deps.extend(info.build_dependencies.iter());
            }

            for dep in deps {
                // Map presence doubles as the visited check: a name seen
                // once is never re-expanded, which bounds the traversal on
                // cyclic graphs.
                if !self.entries.contains_key(dep) {
                    self.entries.insert(dep.clone(), Entry::named(dep.clone()));
                    pending.push_back(dep.clone());
                }
            }
        }

        Ok(())
    }

    /// Render every entry and sort the lines lexicographically.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.entries.values().map(Entry::format).collect();
        lines.sort();
        lines
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }
}

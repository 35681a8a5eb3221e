//! # QueryCache — keyed store with prefix invalidation
//!
//! The shared cache every data-access hook reads through. Entries are stored
//! as [`serde_json::Value`] so one map can hold both note lists and single
//! notes; callers deserialize on read.
//!
//! Invalidation is deliberately coarse: a mutation invalidates the whole
//! `["notes"]` prefix rather than the affected page/sort key, so every
//! variant is re-fetched on its next read. The cache never patches an entry
//! after a mutation — temporary staleness between mutation and refetch is
//! expected.
//!
//! The cache is plain owned data. In the app it lives inside a Dioxus
//! `Signal`, which provides the single-threaded sharing and the re-run
//! notification for resources that read it.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::key::QueryKey;

/// Keyed store of cached query results.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and deserialize a cached entry. A missing key and an entry that
    /// no longer deserializes to `T` both read as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.entries.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Store a query result under its key, replacing any previous entry.
    pub fn put<T: Serialize>(&mut self, key: &QueryKey, value: &T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.insert(key.clone(), value);
        }
    }

    /// Remove every entry whose key starts with `prefix`.
    pub fn invalidate(&mut self, prefix: &QueryKey) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

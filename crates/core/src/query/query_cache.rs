//! In-memory query cache with TTL using moka

use moka::future::Cache;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{Error, Result};

/// Cache key made of a scope, a schema version and an identifier.
///
/// Entries written under one version are never visible to lookups made with
/// another, so a change in the cached value's shape only needs a version bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    scope: &'static str,
    version: u32,
    id: String,
}

impl QueryKey {
    pub fn new(scope: &'static str, version: u32, id: impl ToString) -> Self {
        Self {
            scope,
            version,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:v{}:{}", self.scope, self.version, self.id)
    }
}

/// Keyed query cache with a freshness window.
///
/// Concurrent loads for the same key are coalesced: only the first caller runs
/// its fetch future, the others wait for and share its outcome. Failed loads
/// are not stored.
pub struct QueryCache<V> {
    entries: Cache<QueryKey, V>,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache whose entries expire `stale_time` after being written
    pub fn new(stale_time: Duration, max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .time_to_live(stale_time)
                .max_capacity(max_capacity)
                .build(),
        }
    }

    /// Get a fresh entry from cache
    pub async fn get(&self, key: &QueryKey) -> Option<V> {
        self.entries.get(key).await
    }

    /// Store an entry in cache
    pub async fn insert(&self, key: QueryKey, value: V) {
        self.entries.insert(key, value).await;
    }

    /// Return the fresh entry for `key`, or run `fetch` to produce and store it.
    pub async fn get_or_fetch<F>(&self, key: QueryKey, fetch: F) -> Result<V>
    where
        F: Future<Output = Result<V>>,
    {
        self.entries
            .try_get_with(key, fetch)
            .await
            .map_err(|err: Arc<Error>| Error::clone(&err))
    }

    /// Remove an entry from cache
    pub async fn invalidate(&self, key: &QueryKey) {
        self.entries.invalidate(key).await;
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Number of live entries, after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

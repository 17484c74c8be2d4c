//! Generic async cache with TTL support.
//!
//! This module provides a Redis-like caching interface with:
//! - Async API using DashMap for concurrent access
//! - TTL (Time To Live) with background cleanup
//! - Thread-safe (Send + Sync) for use in async contexts
//!
//! It backs the server-side session store.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A cache entry and the moment it stops being visible.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    /// The cached value
    value: V,
    /// Expiration timestamp
    expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Create a new cache entry with expiration.
    fn with_expiration(value: V, ttl_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    /// Check if the entry has expired.
    fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Cache configuration options.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Background cleanup interval in seconds (default: 60)
    pub cleanup_interval_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cleanup_interval_seconds: 60,
        }
    }
}

/// Local backend implementation using DashMap.
#[derive(Debug)]
pub struct LocalBackend<V> {
    /// Thread-safe storage for cache entries
    storage: Arc<DashMap<String, CacheEntry<V>>>,
    /// Background cleanup task handle
    cleanup_task: Option<JoinHandle<()>>,
}

impl<V> LocalBackend<V>
where
    V: Send + Sync + Clone + 'static,
{
    /// Create a new local backend with the given configuration.
    ///
    /// Must be called from within a Tokio runtime.
    fn new(config: CacheConfig) -> Self {
        let storage = Arc::new(DashMap::new());
        let cleanup_task = Some(Self::spawn_cleanup_task(
            Arc::clone(&storage),
            config.cleanup_interval_seconds,
        ));

        Self {
            storage,
            cleanup_task,
        }
    }

    /// Spawn a background task to clean up expired entries.
    fn spawn_cleanup_task(
        storage: Arc<DashMap<String, CacheEntry<V>>>,
        interval_seconds: u64,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_secs(interval_seconds.max(1)));
            loop {
                interval.tick().await;
                let now = Utc::now();
                let before = storage.len();
                storage.retain(|_, entry| entry.expires_at > now);
                let cleaned = before.saturating_sub(storage.len());
                if cleaned > 0 {
                    tracing::debug!(cleaned, "Removed expired cache entries");
                }
            }
        })
    }

    /// Get a value by key (returns None if key doesn't exist or is expired).
    async fn get(&self, key: &str) -> Option<V> {
        if let Some(entry) = self.storage.get(key) {
            if !entry.is_expired() {
                return Some(entry.value.clone());
            }
        }
        None
    }

    /// Set a value with expiration in seconds.
    async fn set_ex(&self, key: &str, value: V, ttl_seconds: u64) {
        let entry = CacheEntry::with_expiration(value, ttl_seconds as i64);
        self.storage.insert(key.to_string(), entry);
    }

    /// Delete a key (returns true if key existed).
    async fn delete(&self, key: &str) -> bool {
        self.storage.remove(key).is_some()
    }

    /// Number of stored entries, expired ones included until the next sweep.
    fn len(&self) -> usize {
        self.storage.len()
    }
}

impl<V> Drop for LocalBackend<V> {
    fn drop(&mut self) {
        // Abort the cleanup task when the backend is dropped
        if let Some(task) = self.cleanup_task.take() {
            task.abort();
        }
    }
}

/// Generic cache enum with extensible backend variants.
///
/// Currently only supports `LocalCache` variant, but designed to be
/// extended with `RedisCache` or other backends in the future.
///
/// # Example
/// ```rust,no_run
/// use telemed::cache::{Cache, CacheConfig};
///
/// # async fn demo() {
/// let cache: Cache<String> = Cache::new_local(CacheConfig::default());
/// # }
/// ```
#[derive(Debug)]
pub enum Cache<V>
where
    V: Send + Sync + 'static,
{
    /// Local in-memory cache using DashMap
    LocalCache(LocalBackend<V>),
}

impl<V> Cache<V>
where
    V: Send + Sync + Clone + 'static,
{
    /// Create a new local cache with the given configuration.
    pub fn new_local(config: CacheConfig) -> Self {
        Self::LocalCache(LocalBackend::new(config))
    }

    /// Get a value by key.
    ///
    /// # Returns
    /// * `Ok(Some(value))` if key exists and is not expired
    /// * `Ok(None)` if key doesn't exist or is expired
    pub async fn get(&self, key: &str) -> Result<Option<V>> {
        match self {
            Self::LocalCache(backend) => Ok(backend.get(key).await),
        }
    }

    /// Set a value with expiration in seconds.
    pub async fn set_ex(&self, key: &str, value: V, ttl_seconds: u64) -> Result<()> {
        match self {
            Self::LocalCache(backend) => {
                backend.set_ex(key, value, ttl_seconds).await;
                Ok(())
            }
        }
    }

    /// Delete a key.
    ///
    /// # Returns
    /// * `Ok(true)` if key existed and was deleted
    /// * `Ok(false)` if key didn't exist
    pub async fn delete(&self, key: &str) -> Result<bool> {
        match self {
            Self::LocalCache(backend) => Ok(backend.delete(key).await),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::LocalCache(backend) => backend.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

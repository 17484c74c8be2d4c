//! Server-side session storage.
//!
//! The browser only ever holds an opaque random token. The store is keyed by
//! the token's SHA-256, never by the raw token.

use rand::Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::{
    cache::{Cache, CacheConfig},
    config::SessionConfig,
    error::Result,
    models::sessions::SessionData,
};

/// Hashes a session token for storage lookup.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Generates a fresh 256-bit session token, hex encoded.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Arc<Cache<SessionData>>,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Creates the store and its background expiry sweep.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::new_local(CacheConfig {
            cleanup_interval_seconds: config.cleanup_interval_seconds,
        });

        Self {
            cache: Arc::new(cache),
            ttl_seconds: config.ttl_seconds,
        }
    }

    /// Loads the session for `token`, or `None` if it is unknown or expired.
    pub async fn load(&self, token: &str) -> Result<Option<SessionData>> {
        if token.trim().is_empty() {
            return Ok(None);
        }
        self.cache.get(&hash_session_token(token)).await
    }

    /// Stores `data` under `token`, restarting its lifetime.
    pub async fn save(&self, token: &str, data: SessionData) -> Result<()> {
        self.cache
            .set_ex(&hash_session_token(token), data, self.ttl_seconds)
            .await
    }

    /// Removes the session. Returns whether it existed.
    pub async fn destroy(&self, token: &str) -> Result<bool> {
        self.cache.delete(&hash_session_token(token)).await
    }

    /// Number of stored sessions, for diagnostics.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

use crate::{config::Config, error::Result, services::sessions::SessionStore, store::Store};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
///
/// Built once at start-up and injected into the router; nothing in the
/// crate reaches for process-wide globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Record persistence
    pub store: Store,
    /// Server-side session storage
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// Must be called from within a Tokio runtime (the session store spawns
    /// its expiry sweep).
    pub fn new(config: Config, store: Store) -> Self {
        let sessions = SessionStore::new(&config.session);
        Self {
            config: Arc::new(config),
            store,
            sessions,
        }
    }

    /// Connects the configured store and assembles the state.
    pub async fn from_config(config: Config) -> Result<Self> {
        let store = Store::from_config(&config).await?;
        Ok(Self::new(config, store))
    }
}

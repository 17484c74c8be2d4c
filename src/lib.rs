pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

pub use cache::{Cache, CacheConfig};
pub use config::Config;
pub use database::{DbConn, DbPool};
pub use error::{Error, Result};
pub use routes::build_router;
pub use state::AppState;
pub use store::Store;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to info for this crate and
/// the HTTP trace layer.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("telemed=info,tower_http=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::services::cookies::SameSite;

use std::fmt;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which persistence backend the application runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local collections, lost on restart.
    #[default]
    Memory,
    /// PostgreSQL via `database.*`.
    Postgres,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub user: String,
    #[serde(skip_serializing, default = "default_database_password")]
    pub password: SecretString,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the opaque session token
    pub cookie_name: String,
    /// Lifetime of an idle session, refreshed on every request that carries it
    pub ttl_seconds: u64,
    /// Secure flag ensures HTTPS-only transmission (should be true in production)
    pub secure: bool,
    /// SameSite attribute for CSRF protection
    pub same_site: SameSite,
    /// Interval of the background sweep that drops expired sessions
    pub cleanup_interval_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `TELEMED__` prefix and `__` separator
            // e.g., TELEMED__SERVER__PORT=8080
            .add_source(
                config::Environment::with_prefix("TELEMED")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Constructs the database connection string.
    pub fn connection_string(&self) -> SecretString {
        SecretString::from(format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port,
            self.database
        ))
    }
}

fn default_database_password() -> SecretString {
    "password".to_string().into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// Default values for the database configuration
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            password: default_database_password(),
            host: "localhost".to_string(),
            port: 5432,
            database: "telemed".to_string(),
            max_connections: 10,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "session".to_string(),
            ttl_seconds: 7 * 24 * 60 * 60,
            secure: false,
            same_site: SameSite::Lax,
            cleanup_interval_seconds: 60,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Password is skipped by serde
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}

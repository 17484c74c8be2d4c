use thiserror::Error;

// Import Axum types for HTTP response conversion
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The custom error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the sqlx library.
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema migrations failed to apply at start-up.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// A validation error. The message is shown to the user as a flash notice.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A not found error (resource does not exist).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A conflict error (resource already exists).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An authentication error (invalid credentials).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// An internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Error::Authentication(_) => (StatusCode::UNAUTHORIZED, "AUTHENTICATION_FAILED"),
            Error::Sqlx(_) | Error::Migrate(_) | Error::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        }
    }
}

/// Convert custom Error to HTTP response
///
/// Each variant maps to a status code and a JSON body with an error message
/// and error code. Store and configuration failures are logged and reported
/// with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Error::Validation(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg)
            | Error::Authentication(msg) => msg.clone(),
            Error::Sqlx(_) | Error::Migrate(_) => {
                tracing::error!(error = %self, "Database failure while handling request");
                "Database error".to_string()
            }
            Error::Internal(_) => {
                tracing::error!(error = %self, "Internal failure while handling request");
                "Internal server error".to_string()
            }
            Error::Config(_) => {
                tracing::error!(error = %self, "Configuration failure while handling request");
                "Configuration error".to_string()
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": code
        });

        (status, Json(body)).into_response()
    }
}

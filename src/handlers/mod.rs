//! HTTP handlers.
//!
//! Handlers translate requests into service calls and answer with either a
//! rendered [`Page`] or a `303 See Other` redirect. Failures a visitor can
//! fix (blank fields, bad credentials, a taken email) become flash notices;
//! everything else propagates as an [`Error`] response.

pub mod appointments;
pub mod auth;
pub mod contact;
pub mod doctors;
pub mod feedback;
pub mod health;
pub mod pages;
pub mod patients;
pub mod prescriptions;

use axum::Json;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    middleware::Session,
    models::views::Page,
};

/// Builds a page, consuming the notices queued on the session.
pub(crate) async fn render<T: Serialize>(
    session: &Session,
    template: &'static str,
    context: T,
) -> Json<Page<T>> {
    Json(Page {
        template,
        flashes: session.take_flashes().await,
        context,
    })
}

/// Extracts the notice text from a failure the visitor caused.
pub(crate) fn into_notice(err: Error) -> Result<String> {
    match err {
        Error::Validation(msg) | Error::Conflict(msg) | Error::Authentication(msg) => Ok(msg),
        other => Err(other),
    }
}

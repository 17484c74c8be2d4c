//! Cookie-backed server-side sessions and role guards.
//!
//! [`session_middleware`] resolves the session cookie before the handler runs
//! and places a [`Session`] handle in the request extensions. Once the
//! handler returns, dirty sessions are written back and the cookie is
//! refreshed, rotated or cleared.
//!
//! [`DoctorSession`] and [`PatientSession`] are extractors that admit only a
//! signed-in caller with the matching role. Anyone else is silently
//! redirected to the home page.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header::COOKIE, header::SET_COOKIE, request::Parts},
    middleware::Next,
    response::{Redirect, Response},
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    error::{Error, Result},
    models::{
        sessions::{Identity, SessionData},
        users::Role,
    },
    services::{
        cookies::{build_clear_session_cookie, build_session_cookie, extract_cookie_value},
        sessions::generate_session_token,
    },
    state::AppState,
};

#[derive(Debug, Default)]
struct SessionState {
    data: SessionData,
    /// Data changed and must be written back
    dirty: bool,
    /// Issue a new token on write-back (set on login)
    rotate: bool,
    /// Session was cleared (logout)
    destroyed: bool,
}

/// Per-request handle to the caller's session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionState>>,
}

impl Session {
    fn from_data(data: SessionData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                data,
                ..Default::default()
            })),
        }
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.inner.lock().await.data.identity
    }

    /// Records a successful sign-in. The session token is rotated when the
    /// response is written.
    pub async fn sign_in(&self, identity: Identity) {
        let mut state = self.inner.lock().await;
        state.data.identity = Some(identity);
        state.destroyed = false;
        state.dirty = true;
        state.rotate = true;
    }

    /// Queues a one-shot notice for the next rendered page.
    pub async fn flash(&self, message: impl Into<String>) {
        let mut state = self.inner.lock().await;
        state.data.flashes.push(message.into());
        state.dirty = true;
    }

    /// Drains queued notices.
    pub async fn take_flashes(&self) -> Vec<String> {
        let mut state = self.inner.lock().await;
        if state.data.flashes.is_empty() {
            return Vec::new();
        }
        state.dirty = true;
        std::mem::take(&mut state.data.flashes)
    }

    /// Forgets everything, including the identity.
    pub async fn clear(&self) {
        let mut state = self.inner.lock().await;
        state.data = SessionData::default();
        state.destroyed = true;
        state.dirty = false;
        state.rotate = false;
    }

    async fn into_state(self) -> SessionState {
        let mut state = self.inner.lock().await;
        std::mem::take(&mut *state)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| Error::Internal("Session middleware is not installed".to_string()))
    }
}

/// Session middleware
///
/// # Behavior
/// 1. Reads the session token from the configured cookie
/// 2. Loads the session data (an unknown or expired token starts empty)
/// 3. Adds a `Session` handle to request extensions
/// 4. After the handler: destroys, rotates or refreshes the stored session
///    and emits the matching `Set-Cookie` header
///
/// An anonymous visitor whose session stays empty never receives a cookie.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let session_config = &state.config.session;

    let token = request
        .headers()
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| extract_cookie_value(h, &session_config.cookie_name))
        .filter(|t| !t.is_empty());

    let existing = match &token {
        Some(token) => state.sessions.load(token).await?,
        None => None,
    };
    let token = existing.as_ref().and(token);

    let session = Session::from_data(existing.unwrap_or_default());
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    let outcome = session.into_state().await;

    let set_cookie = if outcome.destroyed {
        match token {
            Some(token) => {
                state.sessions.destroy(&token).await?;
                Some(build_clear_session_cookie(session_config))
            }
            None => None,
        }
    } else if token.is_some() || (outcome.dirty && !outcome.data.is_empty()) {
        let token = match token {
            Some(old) if outcome.rotate => {
                state.sessions.destroy(&old).await?;
                generate_session_token()
            }
            Some(current) => current,
            None => generate_session_token(),
        };
        state.sessions.save(&token, outcome.data).await?;
        Some(build_session_cookie(&token, session_config))
    } else {
        None
    };

    if let Some(cookie) = set_cookie {
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| Error::Internal(format!("Invalid session cookie: {}", e)))?;
        response.headers_mut().append(SET_COOKIE, value);
    }

    Ok(response)
}

async fn require_role(
    session: Option<Session>,
    role: Role,
) -> std::result::Result<Identity, Redirect> {
    let session = session.ok_or_else(|| Redirect::to("/"))?;

    match session.identity().await {
        Some(identity) if identity.role == role => Ok(identity),
        _ => {
            tracing::debug!(required = %role, "Role guard rejected request");
            Err(Redirect::to("/"))
        }
    }
}

/// A signed-in doctor.
#[derive(Debug, Clone, Copy)]
pub struct DoctorSession(pub Identity);

impl<S> FromRequestParts<S> for DoctorSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        require_role(parts.extensions.get::<Session>().cloned(), Role::Doctor).await.map(Self)
    }
}

/// A signed-in patient.
#[derive(Debug, Clone, Copy)]
pub struct PatientSession(pub Identity);

impl<S> FromRequestParts<S> for PatientSession
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        require_role(parts.extensions.get::<Session>().cloned(), Role::Patient).await.map(Self)
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::users::Role;

/// The authenticated caller as recorded in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

/// Server-side session payload keyed by the hashed session token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub identity: Option<Identity>,
    /// One-shot notices, drained by the next rendered page
    pub flashes: Vec<String>,
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        self.identity.is_none() && self.flashes.is_empty()
    }
}

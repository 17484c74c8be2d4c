use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    /// Always within 1..=5
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub rating: i16,
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaveFeedback {
    pub rating: String,
    pub comment: String,
}

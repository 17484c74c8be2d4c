use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking request. `patient_name` is copied from the patient at booking
/// time and does not follow later renames.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub date_time: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub date_time: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointment {
    pub date_time: String,
    pub message: String,
}

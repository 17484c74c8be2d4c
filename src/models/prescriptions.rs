use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A doctor-authored prescription addressed to a patient by email.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Prescription {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_email: String,
    pub disease: String,
    pub prescription: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub doctor_id: Uuid,
    pub patient_email: String,
    pub disease: String,
    pub prescription: String,
}

#[derive(Debug, Clone)]
pub struct UpdatePrescription {
    pub disease: String,
    pub prescription: String,
}

/// Every key must be present in the submitted form; blank values are
/// rejected later with a notice.
#[derive(Debug, Clone, Deserialize)]
pub struct PostPrescription {
    pub patient_email: String,
    pub disease: String,
    pub prescription: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditPrescription {
    pub disease: String,
    pub prescription: String,
}

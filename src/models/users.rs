use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Which side of the consultation an account is on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Doctor,
    Patient,
}

/// Self-described practice details. Every field stays absent until the
/// doctor writes it from the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DoctorProfile {
    pub specialization: Option<String>,
    pub experience: Option<String>,
    pub council_id: Option<String>,
    pub availability: Option<String>,
    pub fee_hour: Option<String>,
    pub fee_day: Option<String>,
    pub fee_month: Option<String>,
    pub video_link: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
}

impl DoctorProfile {
    /// Overwrites every field present in `changes`, leaving the rest alone.
    pub fn apply(&mut self, changes: DoctorProfile) {
        fn merge(target: &mut Option<String>, change: Option<String>) {
            if change.is_some() {
                *target = change;
            }
        }

        merge(&mut self.specialization, changes.specialization);
        merge(&mut self.experience, changes.experience);
        merge(&mut self.council_id, changes.council_id);
        merge(&mut self.availability, changes.availability);
        merge(&mut self.fee_hour, changes.fee_hour);
        merge(&mut self.fee_day, changes.fee_day);
        merge(&mut self.fee_month, changes.fee_month);
        merge(&mut self.video_link, changes.video_link);
        merge(&mut self.address, changes.address);
        merge(&mut self.contact, changes.contact);
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: DoctorProfile,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Registration form. `role` stays a string so an unknown choice is
/// reported as a form notice instead of a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUser {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

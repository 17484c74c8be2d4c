//! Persistence for the five collections.
//!
//! `Store` is an enum over backends so handlers never care where records
//! live. The memory backend serves development and tests; the Postgres
//! backend delegates to [`crate::queries`].

pub mod memory;

use uuid::Uuid;

use crate::{
    config::{Config, StoreBackend},
    database::{self, DbPool},
    error::Result,
    models::{
        appointments::{Appointment, NewAppointment},
        contact::{ContactMessage, NewContactMessage},
        feedback::{Feedback, NewFeedback},
        prescriptions::{NewPrescription, Prescription, UpdatePrescription},
        users::{DoctorProfile, NewUser, Role, User},
    },
    queries,
};

pub use memory::MemoryBackend;

#[derive(Debug, Clone)]
pub enum Store {
    /// In-memory collections using DashMap
    Memory(MemoryBackend),
    /// PostgreSQL connection pool
    Postgres(DbPool),
}

impl Store {
    /// Create an empty in-memory store.
    pub fn new_memory() -> Self {
        Self::Memory(MemoryBackend::new())
    }

    /// Build the backend selected by `store.backend`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.store.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data is lost on restart");
                Ok(Self::new_memory())
            }
            StoreBackend::Postgres => Ok(Self::Postgres(database::connect(&config.database).await?)),
        }
    }

    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let id = Uuid::now_v7();
        match self {
            Self::Memory(backend) => backend.create_user(id, new_user),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::create_user(&mut conn, id, new_user).await
            }
        }
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        match self {
            Self::Memory(backend) => Ok(backend.get_user_by_id(id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::get_user_by_id(&mut conn, id).await
            }
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        match self {
            Self::Memory(backend) => Ok(backend.get_user_by_email(email)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::get_user_by_email(&mut conn, email).await
            }
        }
    }

    pub async fn get_user_by_email_and_role(&self, email: &str, role: Role) -> Result<Option<User>> {
        match self {
            Self::Memory(backend) => Ok(backend.get_user_by_email_and_role(email, role)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::get_user_by_email_and_role(&mut conn, email, role).await
            }
        }
    }

    pub async fn list_doctors(&self) -> Result<Vec<User>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_doctors()),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::list_doctors(&mut conn).await
            }
        }
    }

    pub async fn update_doctor_profile(
        &self,
        id: Uuid,
        changes: DoctorProfile,
    ) -> Result<Option<User>> {
        match self {
            Self::Memory(backend) => Ok(backend.update_doctor_profile(id, changes)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::users::update_doctor_profile(&mut conn, id, changes).await
            }
        }
    }

    pub async fn create_prescription(
        &self,
        new_prescription: NewPrescription,
    ) -> Result<Prescription> {
        let id = Uuid::now_v7();
        match self {
            Self::Memory(backend) => Ok(backend.create_prescription(id, new_prescription)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::create_prescription(&mut conn, id, new_prescription).await
            }
        }
    }

    pub async fn get_prescription_by_id(&self, id: Uuid) -> Result<Option<Prescription>> {
        match self {
            Self::Memory(backend) => Ok(backend.get_prescription_by_id(id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::get_prescription_by_id(&mut conn, id).await
            }
        }
    }

    pub async fn list_prescriptions_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Prescription>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_prescriptions_by_doctor(doctor_id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::list_prescriptions_by_doctor(&mut conn, doctor_id).await
            }
        }
    }

    pub async fn list_prescriptions_by_patient_email(
        &self,
        patient_email: &str,
    ) -> Result<Vec<Prescription>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_prescriptions_by_patient_email(patient_email)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::list_prescriptions_by_patient_email(&mut conn, patient_email)
                    .await
            }
        }
    }

    /// Returns `None` unless `id` exists and belongs to `doctor_id`.
    pub async fn update_prescription(
        &self,
        id: Uuid,
        doctor_id: Uuid,
        changes: UpdatePrescription,
    ) -> Result<Option<Prescription>> {
        match self {
            Self::Memory(backend) => Ok(backend.update_prescription(id, doctor_id, changes)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::update_prescription(&mut conn, id, doctor_id, changes).await
            }
        }
    }

    /// Returns the number of records removed (0 or 1).
    pub async fn delete_prescription(&self, id: Uuid, doctor_id: Uuid) -> Result<u64> {
        match self {
            Self::Memory(backend) => Ok(backend.delete_prescription(id, doctor_id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::prescriptions::delete_prescription(&mut conn, id, doctor_id).await
            }
        }
    }

    pub async fn create_appointment(&self, new_appointment: NewAppointment) -> Result<Appointment> {
        let id = Uuid::now_v7();
        match self {
            Self::Memory(backend) => Ok(backend.create_appointment(id, new_appointment)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::appointments::create_appointment(&mut conn, id, new_appointment).await
            }
        }
    }

    pub async fn list_appointments_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Appointment>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_appointments_by_doctor(doctor_id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::appointments::list_appointments_by_doctor(&mut conn, doctor_id).await
            }
        }
    }

    pub async fn list_appointments_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_appointments_by_patient(patient_id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::appointments::list_appointments_by_patient(&mut conn, patient_id).await
            }
        }
    }

    pub async fn create_feedback(&self, new_feedback: NewFeedback) -> Result<Feedback> {
        let id = Uuid::now_v7();
        match self {
            Self::Memory(backend) => Ok(backend.create_feedback(id, new_feedback)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::feedback::create_feedback(&mut conn, id, new_feedback).await
            }
        }
    }

    pub async fn list_feedback_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Feedback>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_feedback_by_doctor(doctor_id)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::feedback::list_feedback_by_doctor(&mut conn, doctor_id).await
            }
        }
    }

    pub async fn create_contact_message(
        &self,
        new_message: NewContactMessage,
    ) -> Result<ContactMessage> {
        let id = Uuid::now_v7();
        match self {
            Self::Memory(backend) => Ok(backend.create_contact_message(id, new_message)),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::contact::create_contact_message(&mut conn, id, new_message).await
            }
        }
    }

    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        match self {
            Self::Memory(backend) => Ok(backend.list_contact_messages()),
            Self::Postgres(pool) => {
                let mut conn = pool.acquire().await?;
                queries::contact::list_contact_messages(&mut conn).await
            }
        }
    }
}

//! Process-local document collections backed by `DashMap`.
//!
//! Every operation touches a single record, so concurrent writers get
//! last-write-wins semantics exactly like the SQL backend.

use chrono::Utc;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::{
        appointments::{Appointment, NewAppointment},
        contact::{ContactMessage, NewContactMessage},
        feedback::{Feedback, NewFeedback},
        prescriptions::{NewPrescription, Prescription, UpdatePrescription},
        users::{DoctorProfile, NewUser, Role, User},
    },
};

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    users: Arc<DashMap<Uuid, User>>,
    /// Unique email index over `users`
    emails: Arc<DashMap<String, Uuid>>,
    prescriptions: Arc<DashMap<Uuid, Prescription>>,
    appointments: Arc<DashMap<Uuid, Appointment>>,
    feedback: Arc<DashMap<Uuid, Feedback>>,
    contact_messages: Arc<DashMap<Uuid, ContactMessage>>,
}

/// Collects matching values ordered by id (UUIDv7, so creation order).
fn collect_sorted<T: Clone>(
    map: &DashMap<Uuid, T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Vec<T> {
    let mut items: Vec<(Uuid, T)> = map
        .iter()
        .filter(|entry| predicate(entry.value()))
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();
    items.sort_by_key(|(id, _)| *id);
    items.into_iter().map(|(_, value)| value).collect()
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&self, id: Uuid, new_user: NewUser) -> Result<User> {
        match self.emails.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(Error::Conflict(
                "An account with this email already exists.".to_string(),
            )),
            Entry::Vacant(slot) => {
                let user = User {
                    id,
                    role: new_user.role,
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    profile: DoctorProfile::default(),
                    created_at: Utc::now(),
                };
                // Insert the record before releasing the email slot
                self.users.insert(id, user.clone());
                slot.insert(id);
                Ok(user)
            }
        }
    }

    pub fn get_user_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|user| user.clone())
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        let id = *self.emails.get(email)?;
        self.get_user_by_id(id)
    }

    pub fn get_user_by_email_and_role(&self, email: &str, role: Role) -> Option<User> {
        self.get_user_by_email(email).filter(|user| user.role == role)
    }

    pub fn list_doctors(&self) -> Vec<User> {
        collect_sorted(&self.users, |user| user.role == Role::Doctor)
    }

    pub fn update_doctor_profile(&self, id: Uuid, changes: DoctorProfile) -> Option<User> {
        let mut user = self.users.get_mut(&id)?;
        if user.role != Role::Doctor {
            return None;
        }
        user.profile.apply(changes);
        Some(user.clone())
    }

    pub fn create_prescription(&self, id: Uuid, new_prescription: NewPrescription) -> Prescription {
        let now = Utc::now();
        let prescription = Prescription {
            id,
            doctor_id: new_prescription.doctor_id,
            patient_email: new_prescription.patient_email,
            disease: new_prescription.disease,
            prescription: new_prescription.prescription,
            created_at: now,
            updated_at: now,
        };
        self.prescriptions.insert(id, prescription.clone());
        prescription
    }

    pub fn get_prescription_by_id(&self, id: Uuid) -> Option<Prescription> {
        self.prescriptions.get(&id).map(|p| p.clone())
    }

    pub fn list_prescriptions_by_doctor(&self, doctor_id: Uuid) -> Vec<Prescription> {
        collect_sorted(&self.prescriptions, |p| p.doctor_id == doctor_id)
    }

    pub fn list_prescriptions_by_patient_email(&self, patient_email: &str) -> Vec<Prescription> {
        collect_sorted(&self.prescriptions, |p| p.patient_email == patient_email)
    }

    pub fn update_prescription(
        &self,
        id: Uuid,
        doctor_id: Uuid,
        changes: UpdatePrescription,
    ) -> Option<Prescription> {
        let mut prescription = self.prescriptions.get_mut(&id)?;
        if prescription.doctor_id != doctor_id {
            return None;
        }
        prescription.disease = changes.disease;
        prescription.prescription = changes.prescription;
        prescription.updated_at = Utc::now();
        Some(prescription.clone())
    }

    pub fn delete_prescription(&self, id: Uuid, doctor_id: Uuid) -> u64 {
        self.prescriptions
            .remove_if(&id, |_, p| p.doctor_id == doctor_id)
            .map(|_| 1)
            .unwrap_or(0)
    }

    pub fn create_appointment(&self, id: Uuid, new_appointment: NewAppointment) -> Appointment {
        let appointment = Appointment {
            id,
            doctor_id: new_appointment.doctor_id,
            patient_id: new_appointment.patient_id,
            patient_name: new_appointment.patient_name,
            date_time: new_appointment.date_time,
            message: new_appointment.message,
            created_at: Utc::now(),
        };
        self.appointments.insert(id, appointment.clone());
        appointment
    }

    pub fn list_appointments_by_doctor(&self, doctor_id: Uuid) -> Vec<Appointment> {
        collect_sorted(&self.appointments, |a| a.doctor_id == doctor_id)
    }

    pub fn list_appointments_by_patient(&self, patient_id: Uuid) -> Vec<Appointment> {
        collect_sorted(&self.appointments, |a| a.patient_id == patient_id)
    }

    pub fn create_feedback(&self, id: Uuid, new_feedback: NewFeedback) -> Feedback {
        let feedback = Feedback {
            id,
            doctor_id: new_feedback.doctor_id,
            patient_id: new_feedback.patient_id,
            rating: new_feedback.rating,
            comment: new_feedback.comment,
            created_at: Utc::now(),
        };
        self.feedback.insert(id, feedback.clone());
        feedback
    }

    /// Newest first, matching the SQL backend.
    pub fn list_feedback_by_doctor(&self, doctor_id: Uuid) -> Vec<Feedback> {
        let mut feedback = collect_sorted(&self.feedback, |f| f.doctor_id == doctor_id);
        feedback.reverse();
        feedback
    }

    pub fn create_contact_message(&self, id: Uuid, new_message: NewContactMessage) -> ContactMessage {
        let message = ContactMessage {
            id,
            name: new_message.name,
            email: new_message.email,
            subject: new_message.subject,
            message: new_message.message,
            created_at: Utc::now(),
        };
        self.contact_messages.insert(id, message.clone());
        message
    }

    pub fn list_contact_messages(&self) -> Vec<ContactMessage> {
        collect_sorted(&self.contact_messages, |_| true)
    }
}

//! View models handed to the presentation layer.
//!
//! Handlers never produce markup. Each rendered page is a [`Page`] naming the
//! template to draw, the flash notices consumed by this render, and a typed
//! context.

use serde::Serialize;

use super::{
    appointments::Appointment,
    feedback::Feedback,
    prescriptions::Prescription,
    sessions::Identity,
    users::{LoginUser, RegisterUser, User},
};

#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub template: &'static str,
    pub flashes: Vec<String>,
    pub context: T,
}

/// Context for pages that only need to know who is looking.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterView {
    pub form: RegisterUser,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginView {
    pub form: LoginUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDashboard {
    pub doctor: User,
    pub posted_prescriptions: Vec<Prescription>,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub patient: User,
    pub doctors: Vec<User>,
    pub prescriptions: Vec<Prescription>,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorDetails {
    pub doctor: User,
    pub feedback: Vec<Feedback>,
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub doctor: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditPrescriptionView {
    pub prescription: Prescription,
}

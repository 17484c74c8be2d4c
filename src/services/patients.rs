use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::{
        users::{Role, User},
        views::PatientDashboard,
    },
    store::Store,
};

/// Loads a patient by id. Unknown ids and non-patient accounts are both
/// `NotFound`.
pub async fn get_patient(store: &Store, patient_id: Uuid) -> Result<User> {
    store
        .get_user_by_id(patient_id)
        .await?
        .filter(|user| user.role == Role::Patient)
        .ok_or_else(|| Error::NotFound("Patient not found".to_string()))
}

/// Every doctor, plus the prescriptions addressed to the patient's current
/// email and the patient's own bookings.
pub async fn dashboard(store: &Store, patient_id: Uuid) -> Result<PatientDashboard> {
    let patient = get_patient(store, patient_id).await?;
    let doctors = store.list_doctors().await?;
    let prescriptions = store
        .list_prescriptions_by_patient_email(&patient.email)
        .await?;
    let appointments = store.list_appointments_by_patient(patient_id).await?;

    Ok(PatientDashboard {
        patient,
        doctors,
        prescriptions,
        appointments,
    })
}

use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::{
        sessions::Identity,
        users::{DoctorProfile, Role, User},
        views::{DoctorDashboard, DoctorDetails},
    },
    store::Store,
};

/// Loads a doctor by id. Unknown ids and non-doctor accounts are both
/// `NotFound`.
pub async fn get_doctor(store: &Store, doctor_id: Uuid) -> Result<User> {
    store
        .get_user_by_id(doctor_id)
        .await?
        .filter(|user| user.role == Role::Doctor)
        .ok_or_else(|| Error::NotFound("Doctor not found".to_string()))
}

/// The doctor's own record with everything addressed to them.
pub async fn dashboard(store: &Store, doctor_id: Uuid) -> Result<DoctorDashboard> {
    let doctor = get_doctor(store, doctor_id).await?;
    let posted_prescriptions = store.list_prescriptions_by_doctor(doctor_id).await?;
    let appointments = store.list_appointments_by_doctor(doctor_id).await?;

    Ok(DoctorDashboard {
        doctor,
        posted_prescriptions,
        appointments,
    })
}

/// Overwrites the submitted profile fields. Fields absent from `changes`
/// keep their stored value; no field is otherwise validated.
pub async fn update_profile(
    store: &Store,
    doctor_id: Uuid,
    changes: DoctorProfile,
) -> Result<User> {
    let doctor = store
        .update_doctor_profile(doctor_id, changes)
        .await?
        .ok_or_else(|| Error::NotFound("Doctor not found".to_string()))?;

    tracing::info!(doctor_id = %doctor_id, "Doctor profile updated");

    Ok(doctor)
}

/// Public profile page with the feedback patients left.
pub async fn details(
    store: &Store,
    doctor_id: Uuid,
    identity: Option<Identity>,
) -> Result<DoctorDetails> {
    let doctor = get_doctor(store, doctor_id).await?;
    let feedback = store.list_feedback_by_doctor(doctor_id).await?;

    Ok(DoctorDetails {
        doctor,
        feedback,
        identity,
    })
}

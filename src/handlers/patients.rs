use axum::{Json, extract::State};

use crate::{
    error::Result,
    handlers::render,
    middleware::{PatientSession, Session},
    models::views::{Page, PatientDashboard},
    services::patients,
    state::AppState,
};

/// GET /patient_dashboard
///
/// Lists every doctor, the prescriptions addressed to the patient's email
/// and the patient's own appointments.
pub async fn dashboard(
    PatientSession(identity): PatientSession,
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Page<PatientDashboard>>> {
    let view = patients::dashboard(&state.store, identity.user_id).await?;
    Ok(render(&session, "patient_dashboard.html", view).await)
}

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    error::Result,
    handlers::render,
    middleware::{DoctorSession, Session},
    models::{
        users::DoctorProfile,
        views::{DoctorDashboard, DoctorDetails, Page},
    },
    services::doctors,
    state::AppState,
    validation::parse_id,
};

pub const PROFILE_UPDATED_NOTICE: &str = "Profile updated.";

/// GET /doctor_dashboard
///
/// The signed-in doctor's record, the prescriptions they posted and the
/// appointments booked with them.
pub async fn dashboard(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Page<DoctorDashboard>>> {
    let view = doctors::dashboard(&state.store, identity.user_id).await?;
    Ok(render(&session, "doctor_dashboard.html", view).await)
}

/// POST /doctor_dashboard
///
/// Updates the profile fields present in the form; fields left out keep
/// their stored value.
pub async fn update_profile(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
    Form(changes): Form<DoctorProfile>,
) -> Result<Redirect> {
    doctors::update_profile(&state.store, identity.user_id, changes).await?;
    session.flash(PROFILE_UPDATED_NOTICE).await;
    Ok(Redirect::to("/doctor_dashboard"))
}

/// GET /doctor/{id}
///
/// Public profile of a doctor with the feedback left for them. Unknown or
/// malformed ids answer 404.
pub async fn details(
    State(state): State<AppState>,
    session: Session,
    Path(doctor_id): Path<String>,
) -> Result<Json<Page<DoctorDetails>>> {
    let doctor_id = parse_id(&doctor_id, "Doctor")?;
    let view = doctors::details(&state.store, doctor_id, session.identity().await).await?;
    Ok(render(&session, "doctor_details.html", view).await)
}

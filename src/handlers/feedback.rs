use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    error::Result,
    handlers::into_notice,
    middleware::{PatientSession, Session},
    models::feedback::LeaveFeedback,
    services::feedback,
    state::AppState,
    validation::parse_id,
};

pub const THANKS_NOTICE: &str = "Thanks for your feedback!";

/// POST /feedback/{id}
///
/// Form fields: `rating` (whole number 1 to 5) and `comment`. Always returns
/// to the doctor's page, carrying either the thanks or the rating notice.
pub async fn leave(
    PatientSession(identity): PatientSession,
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
    Form(form): Form<LeaveFeedback>,
) -> Result<Redirect> {
    let doctor_id = parse_id(&raw_id, "Doctor")?;

    let notice = match feedback::leave_feedback(&state.store, identity.user_id, doctor_id, form)
        .await
    {
        Ok(_) => THANKS_NOTICE.to_string(),
        Err(err) => into_notice(err)?,
    };
    session.flash(notice).await;

    Ok(Redirect::to(&format!("/doctor/{}", doctor_id)))
}

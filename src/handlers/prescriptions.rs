//! Prescription authoring. Every route requires a signed-in doctor, and
//! edit/delete additionally require that doctor to be the author.

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    error::{Error, Result},
    handlers::{into_notice, render},
    middleware::{DoctorSession, Session},
    models::{
        prescriptions::{EditPrescription, PostPrescription},
        views::{EditPrescriptionView, Page},
    },
    services::prescriptions,
    state::AppState,
    validation::parse_id,
};

pub const POSTED_NOTICE: &str = "Prescription posted.";
pub const UPDATED_NOTICE: &str = "Prescription updated.";
pub const DELETED_NOTICE: &str = "Prescription deleted.";

/// POST /doctor/post_prescription
pub async fn post(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PostPrescription>,
) -> Result<Redirect> {
    let notice = match prescriptions::post_prescription(&state.store, identity.user_id, form).await
    {
        Ok(_) => POSTED_NOTICE.to_string(),
        Err(err) => into_notice(err)?,
    };
    session.flash(notice).await;
    Ok(Redirect::to("/doctor_dashboard"))
}

/// GET /doctor/edit_prescription/{id}
pub async fn edit_page(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
    Path(prescription_id): Path<String>,
) -> Result<Json<Page<EditPrescriptionView>>> {
    let prescription_id = parse_id(&prescription_id, "Prescription")?;
    let prescription =
        prescriptions::get_owned_prescription(&state.store, identity.user_id, prescription_id)
            .await?;
    Ok(render(&session, "edit_prescription.html", EditPrescriptionView { prescription }).await)
}

/// POST /doctor/edit_prescription/{id}
///
/// Blank fields send the doctor back to the edit form with a notice. A
/// prescription that is missing or authored by someone else answers 404.
pub async fn edit(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
    Form(form): Form<EditPrescription>,
) -> Result<Redirect> {
    let prescription_id = parse_id(&raw_id, "Prescription")?;

    match prescriptions::edit_prescription(&state.store, identity.user_id, prescription_id, form)
        .await
    {
        Ok(_) => {
            session.flash(UPDATED_NOTICE).await;
            Ok(Redirect::to("/doctor_dashboard"))
        }
        Err(Error::Validation(msg)) => {
            session.flash(msg).await;
            Ok(Redirect::to(&format!(
                "/doctor/edit_prescription/{}",
                prescription_id
            )))
        }
        Err(err) => Err(err),
    }
}

/// POST /doctor/delete_prescription/{id}
pub async fn delete(
    DoctorSession(identity): DoctorSession,
    State(state): State<AppState>,
    session: Session,
    Path(prescription_id): Path<String>,
) -> Result<Redirect> {
    let prescription_id = parse_id(&prescription_id, "Prescription")?;
    prescriptions::delete_prescription(&state.store, identity.user_id, prescription_id).await?;
    session.flash(DELETED_NOTICE).await;
    Ok(Redirect::to("/doctor_dashboard"))
}

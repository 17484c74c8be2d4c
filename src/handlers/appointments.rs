use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    error::{Error, Result},
    handlers::render,
    middleware::{PatientSession, Session},
    models::{
        appointments::BookAppointment,
        views::{BookingView, Page},
    },
    services::appointments,
    state::AppState,
    validation::parse_id,
};

pub const BOOKED_NOTICE: &str = "Appointment booked!";

/// GET /book/{id}
pub async fn booking_page(
    PatientSession(_identity): PatientSession,
    State(state): State<AppState>,
    session: Session,
    Path(doctor_id): Path<String>,
) -> Result<Json<Page<BookingView>>> {
    let doctor_id = parse_id(&doctor_id, "Doctor")?;
    let view = appointments::booking_view(&state.store, doctor_id).await?;
    Ok(render(&session, "appointment_booking.html", view).await)
}

/// POST /book/{id}
///
/// Form fields: `date_time` (required, free text) and `message`.
pub async fn book(
    PatientSession(identity): PatientSession,
    State(state): State<AppState>,
    session: Session,
    Path(raw_id): Path<String>,
    Form(form): Form<BookAppointment>,
) -> Result<Redirect> {
    let doctor_id = parse_id(&raw_id, "Doctor")?;

    match appointments::book_appointment(&state.store, identity.user_id, doctor_id, form).await {
        Ok(_) => {
            session.flash(BOOKED_NOTICE).await;
            Ok(Redirect::to("/patient_dashboard"))
        }
        Err(Error::Validation(msg)) => {
            session.flash(msg).await;
            Ok(Redirect::to(&format!("/book/{}", doctor_id)))
        }
        Err(err) => Err(err),
    }
}

use uuid::Uuid;

use crate::{
    error::Result,
    models::{
        appointments::{Appointment, BookAppointment, NewAppointment},
        views::BookingView,
    },
    services::{doctors::get_doctor, patients::get_patient},
    store::Store,
    validation::require_fields,
};

pub async fn booking_view(store: &Store, doctor_id: Uuid) -> Result<BookingView> {
    let doctor = get_doctor(store, doctor_id).await?;
    Ok(BookingView { doctor })
}

/// Books a slot with a doctor. `date_time` is free text and there is no
/// conflict detection: overlapping bookings are all accepted.
pub async fn book_appointment(
    store: &Store,
    patient_id: Uuid,
    doctor_id: Uuid,
    form: BookAppointment,
) -> Result<Appointment> {
    let doctor = get_doctor(store, doctor_id).await?;
    require_fields(&[form.date_time.as_str()])?;

    let patient = get_patient(store, patient_id).await?;

    let appointment = store
        .create_appointment(NewAppointment {
            doctor_id: doctor.id,
            patient_id,
            patient_name: patient.name,
            date_time: form.date_time,
            message: form.message,
        })
        .await?;

    tracing::info!(
        appointment_id = %appointment.id,
        doctor_id = %doctor_id,
        patient_id = %patient_id,
        "Appointment booked"
    );

    Ok(appointment)
}

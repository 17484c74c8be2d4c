use crate::{
    error::{Error, Result},
    models::appointments::{Appointment, NewAppointment},
};
use uuid::Uuid;

use crate::DbConn;

const APPOINTMENT_COLUMNS: &str =
    "id, doctor_id, patient_id, patient_name, date_time, message, created_at";

pub async fn create_appointment(
    conn: &mut DbConn,
    id: Uuid,
    new_appointment: NewAppointment,
) -> Result<Appointment> {
    let sql = format!(
        "INSERT INTO appointments (id, doctor_id, patient_id, patient_name, date_time, message) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {APPOINTMENT_COLUMNS}"
    );

    let appointment = sqlx::query_as::<_, Appointment>(&sql)
        .bind(id)
        .bind(new_appointment.doctor_id)
        .bind(new_appointment.patient_id)
        .bind(&new_appointment.patient_name)
        .bind(&new_appointment.date_time)
        .bind(&new_appointment.message)
        .fetch_one(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(appointment)
}

pub async fn list_appointments_by_doctor(
    conn: &mut DbConn,
    doctor_id: Uuid,
) -> Result<Vec<Appointment>> {
    let sql =
        format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE doctor_id = $1 ORDER BY id");

    let appointments = sqlx::query_as::<_, Appointment>(&sql)
        .bind(doctor_id)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(appointments)
}

pub async fn list_appointments_by_patient(
    conn: &mut DbConn,
    patient_id: Uuid,
) -> Result<Vec<Appointment>> {
    let sql =
        format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE patient_id = $1 ORDER BY id");

    let appointments = sqlx::query_as::<_, Appointment>(&sql)
        .bind(patient_id)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(appointments)
}

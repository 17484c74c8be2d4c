use crate::{
    error::{Error, Result},
    models::prescriptions::{NewPrescription, Prescription, UpdatePrescription},
};
use uuid::Uuid;

use crate::DbConn;

const PRESCRIPTION_COLUMNS: &str =
    "id, doctor_id, patient_email, disease, prescription, created_at, updated_at";

pub async fn create_prescription(
    conn: &mut DbConn,
    id: Uuid,
    new_prescription: NewPrescription,
) -> Result<Prescription> {
    let sql = format!(
        "INSERT INTO prescriptions (id, doctor_id, patient_email, disease, prescription) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {PRESCRIPTION_COLUMNS}"
    );

    let prescription = sqlx::query_as::<_, Prescription>(&sql)
        .bind(id)
        .bind(new_prescription.doctor_id)
        .bind(&new_prescription.patient_email)
        .bind(&new_prescription.disease)
        .bind(&new_prescription.prescription)
        .fetch_one(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(prescription)
}

pub async fn get_prescription_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<Prescription>> {
    let sql = format!("SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE id = $1");

    let prescription = sqlx::query_as::<_, Prescription>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(prescription)
}

pub async fn list_prescriptions_by_doctor(
    conn: &mut DbConn,
    doctor_id: Uuid,
) -> Result<Vec<Prescription>> {
    let sql = format!(
        "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE doctor_id = $1 ORDER BY id"
    );

    let prescriptions = sqlx::query_as::<_, Prescription>(&sql)
        .bind(doctor_id)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(prescriptions)
}

pub async fn list_prescriptions_by_patient_email(
    conn: &mut DbConn,
    patient_email: &str,
) -> Result<Vec<Prescription>> {
    let sql = format!(
        "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE patient_email = $1 ORDER BY id"
    );

    let prescriptions = sqlx::query_as::<_, Prescription>(&sql)
        .bind(patient_email)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(prescriptions)
}

/// Rewrites a prescription owned by `doctor_id`. Returns `None` when the id
/// does not exist or belongs to someone else.
pub async fn update_prescription(
    conn: &mut DbConn,
    id: Uuid,
    doctor_id: Uuid,
    changes: UpdatePrescription,
) -> Result<Option<Prescription>> {
    let sql = format!(
        r#"
        UPDATE prescriptions
        SET disease = $1, prescription = $2, updated_at = now()
        WHERE id = $3 AND doctor_id = $4
        RETURNING {PRESCRIPTION_COLUMNS}
        "#
    );

    let prescription = sqlx::query_as::<_, Prescription>(&sql)
        .bind(&changes.disease)
        .bind(&changes.prescription)
        .bind(id)
        .bind(doctor_id)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(prescription)
}

/// Deletes a prescription owned by `doctor_id`, returning the rows removed.
pub async fn delete_prescription(conn: &mut DbConn, id: Uuid, doctor_id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM prescriptions
        WHERE id = $1 AND doctor_id = $2
        "#,
    )
    .bind(id)
    .bind(doctor_id)
    .execute(conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}

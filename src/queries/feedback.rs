use crate::{
    error::{Error, Result},
    models::feedback::{Feedback, NewFeedback},
};
use uuid::Uuid;

use crate::DbConn;

const FEEDBACK_COLUMNS: &str = "id, doctor_id, patient_id, rating, comment, created_at";

pub async fn create_feedback(
    conn: &mut DbConn,
    id: Uuid,
    new_feedback: NewFeedback,
) -> Result<Feedback> {
    let sql = format!(
        "INSERT INTO feedback (id, doctor_id, patient_id, rating, comment) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {FEEDBACK_COLUMNS}"
    );

    let feedback = sqlx::query_as::<_, Feedback>(&sql)
        .bind(id)
        .bind(new_feedback.doctor_id)
        .bind(new_feedback.patient_id)
        .bind(new_feedback.rating)
        .bind(&new_feedback.comment)
        .fetch_one(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(feedback)
}

/// Lists feedback for a doctor, newest first.
pub async fn list_feedback_by_doctor(conn: &mut DbConn, doctor_id: Uuid) -> Result<Vec<Feedback>> {
    let sql = format!(
        "SELECT {FEEDBACK_COLUMNS} FROM feedback WHERE doctor_id = $1 ORDER BY created_at DESC, id DESC"
    );

    let feedback = sqlx::query_as::<_, Feedback>(&sql)
        .bind(doctor_id)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(feedback)
}

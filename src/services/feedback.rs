use uuid::Uuid;

use crate::{
    error::Result,
    models::feedback::{Feedback, LeaveFeedback, NewFeedback},
    services::doctors::get_doctor,
    store::Store,
    validation::parse_rating,
};

/// Records a patient's rating of a doctor, stamped with the current UTC time.
pub async fn leave_feedback(
    store: &Store,
    patient_id: Uuid,
    doctor_id: Uuid,
    form: LeaveFeedback,
) -> Result<Feedback> {
    get_doctor(store, doctor_id).await?;
    let rating = parse_rating(&form.rating)?;

    let feedback = store
        .create_feedback(NewFeedback {
            doctor_id,
            patient_id,
            rating,
            comment: form.comment,
        })
        .await?;

    tracing::info!(
        feedback_id = %feedback.id,
        doctor_id = %doctor_id,
        rating,
        "Feedback left"
    );

    Ok(feedback)
}

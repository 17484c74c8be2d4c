use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::prescriptions::{
        EditPrescription, NewPrescription, PostPrescription, Prescription, UpdatePrescription,
    },
    store::Store,
    validation::require_fields,
};

fn not_found() -> Error {
    Error::NotFound("Prescription not found".to_string())
}

/// Records a prescription authored by `doctor_id`. The patient is named by
/// email only and need not have an account yet.
pub async fn post_prescription(
    store: &Store,
    doctor_id: Uuid,
    form: PostPrescription,
) -> Result<Prescription> {
    require_fields(&[
        form.patient_email.as_str(),
        form.disease.as_str(),
        form.prescription.as_str(),
    ])?;

    let prescription = store
        .create_prescription(NewPrescription {
            doctor_id,
            patient_email: form.patient_email,
            disease: form.disease,
            prescription: form.prescription,
        })
        .await?;

    tracing::info!(
        doctor_id = %doctor_id,
        prescription_id = %prescription.id,
        "Prescription posted"
    );

    Ok(prescription)
}

/// Loads a prescription for its author. Another doctor's prescription is
/// indistinguishable from a missing one.
pub async fn get_owned_prescription(
    store: &Store,
    doctor_id: Uuid,
    prescription_id: Uuid,
) -> Result<Prescription> {
    store
        .get_prescription_by_id(prescription_id)
        .await?
        .filter(|p| p.doctor_id == doctor_id)
        .ok_or_else(not_found)
}

/// Rewrites the diagnosis and text of the author's own prescription.
/// Never creates a record.
pub async fn edit_prescription(
    store: &Store,
    doctor_id: Uuid,
    prescription_id: Uuid,
    form: EditPrescription,
) -> Result<Prescription> {
    require_fields(&[form.disease.as_str(), form.prescription.as_str()])?;

    let prescription = store
        .update_prescription(
            prescription_id,
            doctor_id,
            UpdatePrescription {
                disease: form.disease,
                prescription: form.prescription,
            },
        )
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        doctor_id = %doctor_id,
        prescription_id = %prescription_id,
        "Prescription updated"
    );

    Ok(prescription)
}

/// Deletes the author's own prescription.
pub async fn delete_prescription(
    store: &Store,
    doctor_id: Uuid,
    prescription_id: Uuid,
) -> Result<()> {
    if store.delete_prescription(prescription_id, doctor_id).await? == 0 {
        return Err(not_found());
    }

    tracing::info!(
        doctor_id = %doctor_id,
        prescription_id = %prescription_id,
        "Prescription deleted"
    );

    Ok(())
}

use crate::{
    error::Result,
    models::contact::{ContactMessage, NewContactMessage, SubmitContact},
    store::Store,
    validation::{is_blank, require_present},
};

/// Stores an anonymous contact message. Name, email and message are
/// required; a blank subject is stored as absent. The email is not checked
/// for format.
pub async fn submit_contact(store: &Store, form: SubmitContact) -> Result<ContactMessage> {
    require_present(&[
        form.name.as_deref(),
        form.email.as_deref(),
        form.message.as_deref(),
    ])?;

    let SubmitContact {
        name,
        email,
        subject,
        message,
    } = form;

    let message = store
        .create_contact_message(NewContactMessage {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            subject: subject.filter(|s| !is_blank(s)),
            message: message.unwrap_or_default(),
        })
        .await?;

    tracing::info!(contact_message_id = %message.id, "Contact message received");

    Ok(message)
}

use axum::{Form, extract::State, response::Redirect};

use crate::{
    error::Result,
    handlers::into_notice,
    middleware::Session,
    models::contact::SubmitContact,
    services::contact,
    state::AppState,
};

pub const SUBMITTED_NOTICE: &str = "Message submitted successfully!";

/// POST /submit_contact
///
/// Open to anyone. `name`, `email` and `message` are required, `subject`
/// is optional.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SubmitContact>,
) -> Result<Redirect> {
    let notice = match contact::submit_contact(&state.store, form).await {
        Ok(_) => SUBMITTED_NOTICE.to_string(),
        Err(err) => into_notice(err)?,
    };
    session.flash(notice).await;
    Ok(Redirect::to("/contact"))
}

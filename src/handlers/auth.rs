use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    error::Result,
    handlers::{into_notice, render},
    middleware::Session,
    models::{
        sessions::Identity,
        users::{LoginUser, RegisterUser, Role},
        views::{LoginView, Page, RegisterView},
    },
    services::users,
    state::AppState,
};

pub const REGISTERED_NOTICE: &str = "Registered successfully! Please log in.";

/// Where a freshly signed-in user lands.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Doctor => "/doctor_dashboard",
        Role::Patient => "/patient_dashboard",
    }
}

/// GET /register
pub async fn register_page(session: Session) -> Json<Page<RegisterView>> {
    render(&session, "register.html", RegisterView::default()).await
}

/// POST /register
///
/// Form fields: `role` (`doctor` or `patient`), `name`, `email`, `password`.
///
/// On success flashes a notice and redirects to `/login`. Blank fields, an
/// unknown role or an email that is already registered re-render the form
/// with the matching notice; the password is never echoed back.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(request): Form<RegisterUser>,
) -> Result<Response> {
    match users::register_user(&state.store, request.clone()).await {
        Ok(_) => {
            session.flash(REGISTERED_NOTICE).await;
            Ok(Redirect::to("/login").into_response())
        }
        Err(err) => {
            session.flash(into_notice(err)?).await;
            Ok(render(&session, "register.html", RegisterView { form: request })
                .await
                .into_response())
        }
    }
}

/// GET /login
pub async fn login_page(session: Session) -> Json<Page<LoginView>> {
    render(&session, "login.html", LoginView::default()).await
}

/// POST /login
///
/// Form fields: `role`, `email`, `password`. The email comparison is exact.
///
/// Success signs the session in (issuing a fresh session token) and
/// redirects to the role's dashboard. Any mismatch re-renders the form with
/// "Invalid credentials." and leaves the session signed out.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(request): Form<LoginUser>,
) -> Result<Response> {
    match users::login_user(&state.store, request.clone()).await {
        Ok(user) => {
            session
                .sign_in(Identity {
                    user_id: user.id,
                    role: user.role,
                })
                .await;
            Ok(Redirect::to(dashboard_path(user.role)).into_response())
        }
        Err(err) => {
            session.flash(into_notice(err)?).await;
            Ok(render(&session, "login.html", LoginView { form: request })
                .await
                .into_response())
        }
    }
}

/// GET /logout
pub async fn logout(session: Session) -> Redirect {
    if let Some(identity) = session.identity().await {
        tracing::info!(user_id = %identity.user_id, "User logged out");
    }
    session.clear().await;
    Redirect::to("/")
}

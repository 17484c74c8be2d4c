use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        appointments, auth, contact, doctors, feedback, health::health_check, pages, patients,
        prescriptions,
    },
    middleware::session_middleware,
    state::AppState,
};

/// Builds the application router.
///
/// Every route except `/health` runs behind the session middleware, so
/// handlers and role guards can rely on a [`crate::middleware::Session`]
/// being present.
///
/// # Example
/// ```no_run
/// use telemed::{AppState, Config, Store, build_router};
///
/// # async fn run() {
/// let state = AppState::new(Config::default(), Store::new_memory());
/// let app = build_router(state);
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await.unwrap();
/// axum::serve(listener, app).await.unwrap();
/// # }
/// ```
pub fn build_router(state: AppState) -> Router {
    let site_routes = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact))
        .route("/submit_contact", post(contact::submit))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route(
            "/doctor_dashboard",
            get(doctors::dashboard).post(doctors::update_profile),
        )
        .route("/doctor/post_prescription", post(prescriptions::post))
        .route(
            "/doctor/edit_prescription/{id}",
            get(prescriptions::edit_page).post(prescriptions::edit),
        )
        .route(
            "/doctor/delete_prescription/{id}",
            post(prescriptions::delete),
        )
        .route("/doctor/{id}", get(doctors::details))
        .route("/patient_dashboard", get(patients::dashboard))
        .route(
            "/book/{id}",
            get(appointments::booking_page).post(appointments::book),
        )
        .route("/feedback/{id}", post(feedback::leave))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(site_routes)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

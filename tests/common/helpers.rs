//! Shared test helper functions

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, Response, header::LOCATION};
use uuid::Uuid;

use crate::common::TestApp;

pub const TEST_PASSWORD: &str = "SecurePass123!";

/// Generates a unique test email using nanosecond timestamp
pub fn generate_test_email() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let random: u32 = rand::random();
    format!("test_{}_{}@example.com", timestamp, random)
}

/// Submits the registration form with `client`.
pub async fn register(
    app: &TestApp,
    client: &Client,
    role: &str,
    name: &str,
    email: &str,
) -> Response {
    app.post_form_as(
        client,
        "/register",
        &[
            ("role", role),
            ("name", name),
            ("email", email),
            ("password", TEST_PASSWORD),
        ],
    )
    .await
}

/// Registers a new account and signs it in on a fresh client.
///
/// # Returns
/// The signed-in client, the account's email and its id.
pub async fn register_and_login(app: &TestApp, role: &str, name: &str) -> (Client, String, Uuid) {
    let client = TestApp::new_client();
    let email = generate_test_email();

    let response = register(app, &client, role, name, &email).await;
    assert_eq!(response.status(), 303, "registration failed");

    let response = app
        .post_form_as(
            &client,
            "/login",
            &[("role", role), ("email", email.as_str()), ("password", TEST_PASSWORD)],
        )
        .await;
    assert_eq!(response.status(), 303, "login failed");

    // Drain the registration notice so later assertions see only their own
    app.get_as(&client, "/").await;

    let id = user_id(app, &email).await;
    (client, email, id)
}

pub async fn user_id(app: &TestApp, email: &str) -> Uuid {
    app.state
        .store
        .get_user_by_email(email)
        .await
        .unwrap()
        .expect("user should exist")
        .id
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
        .to_string()
}

/// Reads a rendered page.
pub async fn page(response: Response) -> serde_json::Value {
    assert_eq!(response.status(), 200);
    response.json().await.expect("page should be JSON")
}

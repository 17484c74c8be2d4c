use crate::common::{TestApp, location, page, register_and_login};

#[tokio::test]
async fn test_dashboard_requires_doctor_role() {
    let app = TestApp::new().await;
    let (patient, _, _) = register_and_login(&app, "patient", "Pat").await;

    for client in [&app.client, &patient] {
        let response = app.get_as(client, "/doctor_dashboard").await;
        assert_eq!(response.status(), 303);
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn test_profile_update_keeps_absent_fields() {
    let app = TestApp::new().await;
    let (doctor, email, id) = register_and_login(&app, "doctor", "Dr. Das").await;

    let response = app
        .post_form_as(
            &doctor,
            "/doctor_dashboard",
            &[
                ("specialization", "Cardiology"),
                ("fee_hour", "60"),
                ("address", "12 Park Street"),
            ],
        )
        .await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/doctor_dashboard");

    app.post_form_as(&doctor, "/doctor_dashboard", &[("fee_hour", "75")])
        .await;

    let body = page(app.get_as(&doctor, "/doctor_dashboard").await).await;
    assert_eq!(body["template"], "doctor_dashboard.html");
    assert_eq!(
        body["flashes"],
        serde_json::json!(["Profile updated.", "Profile updated."])
    );

    let stored = &body["context"]["doctor"];
    assert_eq!(stored["id"], id.to_string());
    assert_eq!(stored["email"], email);
    assert_eq!(stored["specialization"], "Cardiology");
    assert_eq!(stored["address"], "12 Park Street");
    assert_eq!(stored["fee_hour"], "75");
    assert!(stored.get("password_hash").is_none());
}

#[tokio::test]
async fn test_doctor_details_is_public() {
    let app = TestApp::new().await;
    let (doctor, _, id) = register_and_login(&app, "doctor", "Dr. Ahn").await;
    app.post_form_as(&doctor, "/doctor_dashboard", &[("availability", "Weekdays 9-5")])
        .await;

    let body = page(app.get(&format!("/doctor/{}", id)).await).await;

    assert_eq!(body["template"], "doctor_details.html");
    assert_eq!(body["context"]["doctor"]["name"], "Dr. Ahn");
    assert_eq!(body["context"]["doctor"]["availability"], "Weekdays 9-5");
    assert_eq!(body["context"]["feedback"], serde_json::json!([]));
    assert!(body["context"]["identity"].is_null());
}

#[tokio::test]
async fn test_doctor_details_for_non_doctor_is_not_found() {
    let app = TestApp::new().await;
    let (_, _, patient_id) = register_and_login(&app, "patient", "Pat").await;

    for path in [
        format!("/doctor/{}", patient_id),
        "/doctor/64b7f0c2e1a4b5c6d7e8f901".to_string(),
    ] {
        let response = app.get(&path).await;
        assert_eq!(response.status(), 404, "{}", path);
    }
}

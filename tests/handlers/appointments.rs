use crate::common::{TestApp, location, page, register_and_login};

#[tokio::test]
async fn test_patient_books_appointment() {
    let app = TestApp::new().await;
    let (doctor, _, doctor_id) = register_and_login(&app, "doctor", "Dr. Roy").await;
    let (patient, _, patient_id) = register_and_login(&app, "patient", "Omar").await;

    let body = page(app.get_as(&patient, &format!("/book/{}", doctor_id)).await).await;
    assert_eq!(body["template"], "appointment_booking.html");
    assert_eq!(body["context"]["doctor"]["name"], "Dr. Roy");

    let response = app
        .post_form_as(
            &patient,
            &format!("/book/{}", doctor_id),
            &[("date_time", "2026-11-02 10:30"), ("message", "Back pain")],
        )
        .await;
    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), "/patient_dashboard");

    let body = page(app.get_as(&patient, "/patient_dashboard").await).await;
    assert_eq!(body["flashes"], serde_json::json!(["Appointment booked!"]));
    assert_eq!(body["context"]["appointments"][0]["date_time"], "2026-11-02 10:30");

    let body = page(app.get_as(&doctor, "/doctor_dashboard").await).await;
    let booked = body["context"]["appointments"].as_array().unwrap();
    assert_eq!(booked.len(), 1);
    assert_eq!(booked[0]["patient_name"], "Omar");
    assert_eq!(booked[0]["patient_id"], patient_id.to_string());
    assert_eq!(booked[0]["message"], "Back pain");
}

#[tokio::test]
async fn test_overlapping_bookings_are_all_kept() {
    let app = TestApp::new().await;
    let (_, _, doctor_id) = register_and_login(&app, "doctor", "Dr. Roy").await;
    let (first, _, _) = register_and_login(&app, "patient", "A").await;
    let (second, _, _) = register_and_login(&app, "patient", "B").await;

    for client in [&first, &second] {
        let response = app
            .post_form_as(
                client,
                &format!("/book/{}", doctor_id),
                &[("date_time", "Friday 9am"), ("message", "")],
            )
            .await;
        assert_eq!(response.status(), 303);
    }

    let booked = app
        .state
        .store
        .list_appointments_by_doctor(doctor_id)
        .await
        .unwrap();
    assert_eq!(booked.len(), 2);
}

#[tokio::test]
async fn test_booking_without_date_is_rejected() {
    let app = TestApp::new().await;
    let (_, _, doctor_id) = register_and_login(&app, "doctor", "Dr. Roy").await;
    let (patient, _, _) = register_and_login(&app, "patient", "Omar").await;

    let response = app
        .post_form_as(
            &patient,
            &format!("/book/{}", doctor_id),
            &[("date_time", ""), ("message", "Any time")],
        )
        .await;

    assert_eq!(response.status(), 303);
    assert_eq!(location(&response), format!("/book/{}", doctor_id));
    let body = page(app.get_as(&patient, &location(&response)).await).await;
    assert_eq!(
        body["flashes"],
        serde_json::json!(["Please fill in all required fields."])
    );
    assert!(
        app.state
            .store
            .list_appointments_by_doctor(doctor_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_non_patients_cannot_book() {
    let app = TestApp::new().await;
    let (doctor, _, doctor_id) = register_and_login(&app, "doctor", "Dr. Roy").await;

    for client in [&doctor, &app.client] {
        let response = app
            .post_form_as(
                client,
                &format!("/book/{}", doctor_id),
                &[("date_time", "Monday"), ("message", "")],
            )
            .await;
        assert_eq!(response.status(), 303);
        assert_eq!(location(&response), "/");
    }

    assert!(
        app.state
            .store
            .list_appointments_by_doctor(doctor_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_booking_unknown_doctor_is_not_found() {
    let app = TestApp::new().await;
    let (patient, _, patient_id) = register_and_login(&app, "patient", "Omar").await;

    let response = app.get_as(&patient, &format!("/book/{}", patient_id)).await;
    assert_eq!(response.status(), 404);

    let response = app
        .post_form_as(
            &patient,
            &format!("/book/{}", patient_id),
            &[("date_time", "Monday"), ("message", "")],
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_booking_without_message_key_is_rejected() {
    let app = TestApp::new().await;
    let (_, _, doctor_id) = register_and_login(&app, "doctor", "Dr. Roy").await;
    let (patient, _, _) = register_and_login(&app, "patient", "Omar").await;

    let response = app
        .post_form_as(
            &patient,
            &format!("/book/{}", doctor_id),
            &[("date_time", "Monday 9am")],
        )
        .await;

    assert!(response.status().is_client_error(), "{}", response.status());
    assert!(
        app.state
            .store
            .list_appointments_by_doctor(doctor_id)
            .await
            .unwrap()
            .is_empty()
    );
}

use telemed::{
    Error,
    models::users::{DoctorProfile, NewUser, Role},
    queries::users::{
        create_user, get_user_by_email, get_user_by_email_and_role, get_user_by_id, list_doctors,
        update_doctor_profile,
    },
};
use uuid::Uuid;

use crate::common::TestDb;

fn new_user(role: Role, email: &str) -> NewUser {
    NewUser {
        role,
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "test_hash_12345".to_string(),
    }
}

#[tokio::test]
async fn test_create_user_query() {
    let Some(test_db) = TestDb::new("test_create_user_query").await else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let email = test_db.email();
    let id = Uuid::now_v7();

    let created = create_user(&mut conn, id, new_user(Role::Doctor, &email))
        .await
        .unwrap();

    assert_eq!(created.id, id);
    assert_eq!(created.role, Role::Doctor);
    assert_eq!(created.email, email);
    assert_eq!(created.password_hash, "test_hash_12345");
    assert_eq!(created.profile, DoctorProfile::default());

    let found = get_user_by_id(&mut conn, id).await.unwrap().unwrap();
    assert_eq!(found.email, email);
    assert!(get_user_by_id(&mut conn, Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let Some(test_db) = TestDb::new("test_duplicate_email_is_a_conflict").await else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let email = test_db.email();

    create_user(&mut conn, Uuid::now_v7(), new_user(Role::Doctor, &email))
        .await
        .unwrap();
    let duplicate = create_user(&mut conn, Uuid::now_v7(), new_user(Role::Patient, &email)).await;

    match duplicate {
        Err(Error::Conflict(msg)) => {
            assert_eq!(msg, "An account with this email already exists.")
        }
        other => panic!("expected conflict, got {:?}", other.map(|u| u.id)),
    }
    let stored = get_user_by_email(&mut conn, &email).await.unwrap().unwrap();
    assert_eq!(stored.role, Role::Doctor);
}

#[tokio::test]
async fn test_lookup_by_email_matches_role_exactly() {
    let Some(test_db) = TestDb::new("test_lookup_by_email_matches_role_exactly").await else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let email = test_db.email();
    create_user(&mut conn, Uuid::now_v7(), new_user(Role::Patient, &email))
        .await
        .unwrap();

    let patient = get_user_by_email_and_role(&mut conn, &email, Role::Patient)
        .await
        .unwrap();
    assert_eq!(patient.map(|u| u.role), Some(Role::Patient));

    assert!(
        get_user_by_email_and_role(&mut conn, &email, Role::Doctor)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        get_user_by_email_and_role(&mut conn, &email.to_uppercase(), Role::Patient)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_profile_update_changes_only_present_fields() {
    let Some(test_db) = TestDb::new("test_profile_update_changes_only_present_fields").await
    else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let doctor_id = Uuid::now_v7();
    create_user(&mut conn, doctor_id, new_user(Role::Doctor, &test_db.email()))
        .await
        .unwrap();

    update_doctor_profile(
        &mut conn,
        doctor_id,
        DoctorProfile {
            specialization: Some("Neurology".to_string()),
            fee_hour: Some("80".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let updated = update_doctor_profile(
        &mut conn,
        doctor_id,
        DoctorProfile {
            fee_hour: Some("95".to_string()),
            video_link: Some(String::new()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.profile.specialization.as_deref(), Some("Neurology"));
    assert_eq!(updated.profile.fee_hour.as_deref(), Some("95"));
    assert_eq!(updated.profile.video_link.as_deref(), Some(""));
    assert_eq!(updated.profile.address, None);

    let reloaded = get_user_by_id(&mut conn, doctor_id).await.unwrap().unwrap();
    assert_eq!(reloaded.profile, updated.profile);
}

#[tokio::test]
async fn test_profile_update_ignores_patients() {
    let Some(test_db) = TestDb::new("test_profile_update_ignores_patients").await else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let patient_id = Uuid::now_v7();
    create_user(&mut conn, patient_id, new_user(Role::Patient, &test_db.email()))
        .await
        .unwrap();

    let result = update_doctor_profile(
        &mut conn,
        patient_id,
        DoctorProfile {
            specialization: Some("Self-taught".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
    let patient = get_user_by_id(&mut conn, patient_id).await.unwrap().unwrap();
    assert_eq!(patient.profile.specialization, None);
}

#[tokio::test]
async fn test_list_doctors_excludes_patients() {
    let Some(test_db) = TestDb::new("test_list_doctors_excludes_patients").await else {
        return;
    };
    let mut conn = test_db.get_connection().await;
    let doctor_id = Uuid::now_v7();
    let patient_id = Uuid::now_v7();
    create_user(&mut conn, doctor_id, new_user(Role::Doctor, &test_db.email()))
        .await
        .unwrap();
    create_user(&mut conn, patient_id, new_user(Role::Patient, &test_db.email()))
        .await
        .unwrap();

    let doctors = list_doctors(&mut conn).await.unwrap();

    assert!(doctors.iter().any(|d| d.id == doctor_id));
    assert!(doctors.iter().all(|d| d.role == Role::Doctor));
    assert!(!doctors.iter().any(|d| d.id == patient_id));
}

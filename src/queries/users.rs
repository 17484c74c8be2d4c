use crate::{
    error::{Error, Result},
    models::users::{DoctorProfile, NewUser, Role, User},
};
use uuid::Uuid;

use crate::DbConn;

const USER_COLUMNS: &str = r#"
    id, role, name, email, password_hash,
    specialization, experience, council_id, availability,
    fee_hour, fee_day, fee_month, video_link, address, contact,
    created_at
"#;

/// Creates a new user in the database.
pub async fn create_user(conn: &mut DbConn, id: Uuid, new_user: NewUser) -> Result<User> {
    let sql = format!(
        "INSERT INTO users (id, role, name, email, password_hash) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
    );

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .bind(new_user.role)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            // Check for unique constraint violations on users.email
            let is_unique_violation = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);

            if is_unique_violation {
                Error::Conflict("An account with this email already exists.".to_string())
            } else {
                Error::Sqlx(e)
            }
        })?;

    Ok(user)
}

/// Gets a single user by their ID. The user may not exist.
pub async fn get_user_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Gets a single user by their email address. The user may not exist.
pub async fn get_user_by_email(conn: &mut DbConn, email: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Gets the user registered under `email` with the given role.
pub async fn get_user_by_email_and_role(
    conn: &mut DbConn,
    email: &str,
    role: Role,
) -> Result<Option<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND role = $2");

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .bind(role)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Lists every doctor in registration order.
pub async fn list_doctors(conn: &mut DbConn) -> Result<Vec<User>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY id");

    let users = sqlx::query_as::<_, User>(&sql)
        .bind(Role::Doctor)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(users)
}

/// Overwrites the profile fields present in `changes` on a doctor's record.
/// Returns `None` when no doctor has this id.
pub async fn update_doctor_profile(
    conn: &mut DbConn,
    id: Uuid,
    changes: DoctorProfile,
) -> Result<Option<User>> {
    let sql = format!(
        r#"
        UPDATE users
        SET specialization = COALESCE($1, specialization),
            experience = COALESCE($2, experience),
            council_id = COALESCE($3, council_id),
            availability = COALESCE($4, availability),
            fee_hour = COALESCE($5, fee_hour),
            fee_day = COALESCE($6, fee_day),
            fee_month = COALESCE($7, fee_month),
            video_link = COALESCE($8, video_link),
            address = COALESCE($9, address),
            contact = COALESCE($10, contact)
        WHERE id = $11 AND role = $12
        RETURNING {USER_COLUMNS}
        "#
    );

    let user = sqlx::query_as::<_, User>(&sql)
        .bind(changes.specialization)
        .bind(changes.experience)
        .bind(changes.council_id)
        .bind(changes.availability)
        .bind(changes.fee_hour)
        .bind(changes.fee_day)
        .bind(changes.fee_month)
        .bind(changes.video_link)
        .bind(changes.address)
        .bind(changes.contact)
        .bind(id)
        .bind(Role::Doctor)
        .fetch_optional(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(user)
}

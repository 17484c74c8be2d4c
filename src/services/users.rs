use std::str::FromStr;
use std::sync::LazyLock;

use crate::{
    error::{Error, Result},
    models::users::{LoginUser, NewUser, RegisterUser, Role, User},
    store::Store,
    validation::require_fields,
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub const INVALID_CREDENTIALS_NOTICE: &str = "Invalid credentials.";
pub const INVALID_ROLE_NOTICE: &str = "Please choose a valid role.";

/// Verified against when the account does not exist, so a miss costs the
/// same as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("not-a-real-password").ok());

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();
    Ok(password_hash)
}

/// Verifies a password against a password hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("Invalid password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Internal(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Registers a new doctor or patient account.
///
/// All fields are required. Fails with `Validation` for blank fields or an
/// unknown role and with `Conflict` when the email is already registered.
pub async fn register_user(store: &Store, register_user: RegisterUser) -> Result<User> {
    require_fields(&[
        register_user.role.as_str(),
        register_user.name.as_str(),
        register_user.email.as_str(),
        register_user.password.as_str(),
    ])?;

    let role = Role::from_str(register_user.role.trim())
        .map_err(|_| Error::Validation(INVALID_ROLE_NOTICE.to_string()))?;

    let password_hash = hash_password(&register_user.password)?;

    let new_user = NewUser {
        role,
        name: register_user.name,
        email: register_user.email,
        password_hash,
    };

    let user = store.create_user(new_user).await?;

    tracing::info!(user_id = %user.id, role = %user.role, "Registered user");

    Ok(user)
}

/// Authenticates by exact email, declared role and password.
///
/// Every mismatch yields the same `Authentication` error.
pub async fn login_user(store: &Store, login_user: LoginUser) -> Result<User> {
    require_fields(&[
        login_user.role.as_str(),
        login_user.email.as_str(),
        login_user.password.as_str(),
    ])?;

    let invalid = || Error::Authentication(INVALID_CREDENTIALS_NOTICE.to_string());

    let role = Role::from_str(login_user.role.trim()).map_err(|_| invalid())?;

    let Some(user) = store
        .get_user_by_email_and_role(&login_user.email, role)
        .await?
    else {
        if let Some(dummy) = DUMMY_HASH.as_deref() {
            let _ = verify_password(&login_user.password, dummy);
        }
        tracing::info!(role = %role, "Login failed: unknown account");
        return Err(invalid());
    };

    if !verify_password(&login_user.password, &user.password_hash)? {
        tracing::info!(user_id = %user.id, "Login failed: wrong password");
        return Err(invalid());
    }

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(user)
}

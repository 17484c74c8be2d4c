use crate::{
    error::{Error, Result},
    models::contact::{ContactMessage, NewContactMessage},
};
use uuid::Uuid;

use crate::DbConn;

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, created_at";

pub async fn create_contact_message(
    conn: &mut DbConn,
    id: Uuid,
    new_message: NewContactMessage,
) -> Result<ContactMessage> {
    let sql = format!(
        "INSERT INTO contact_messages (id, name, email, subject, message) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {CONTACT_COLUMNS}"
    );

    let message = sqlx::query_as::<_, ContactMessage>(&sql)
        .bind(id)
        .bind(&new_message.name)
        .bind(&new_message.email)
        .bind(&new_message.subject)
        .bind(&new_message.message)
        .fetch_one(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(message)
}

pub async fn list_contact_messages(conn: &mut DbConn) -> Result<Vec<ContactMessage>> {
    let sql = format!("SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY id");

    let messages = sqlx::query_as::<_, ContactMessage>(&sql)
        .fetch_all(conn)
        .await
        .map_err(Error::Sqlx)?;

    Ok(messages)
}

use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;
use tokio_postgres::Row;
use uuid::Uuid;
use crate::{
    error::{AppError, Result},
    models::user::User,
};

/// A helper function to map a `tokio_postgres::Row` to a `User`.
fn row_to_user(row: &Row) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Creates a new user in the database.
///
/// Fails with `AppError::Conflict` if the email is already registered.
pub async fn create_user(pool: &Pool, email: &str, password_hash: &str) -> Result<User> {
    let client = pool.get().await?;
    let id = Uuid::new_v4();
    let row = client
        .query_one(
            r#"
            INSERT INTO users (id, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, created_at
            "#,
            &[&id, &email, &password_hash],
        )
        .await
        .map_err(|e| {
            if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                AppError::Conflict("Email already registered".to_string())
            } else {
                AppError::Database(e)
            }
        })?;
    row_to_user(&row)
}

/// Finds a user by their email address.
pub async fn find_by_email(pool: &Pool, email: &str) -> Result<Option<User>> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            r#"
            SELECT id, email, password, created_at
            FROM users
            WHERE email = $1
            "#,
            &[&email],
        )
        .await?;
    row.map(|r| row_to_user(&r)).transpose()
}

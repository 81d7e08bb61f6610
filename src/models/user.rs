use uuid::Uuid;
use chrono::{DateTime, Utc};

/// Represents a user in the system.
#[derive(Clone, Debug)]
pub struct User {
    /// The unique identifier for the user.
    pub id: Uuid,
    /// The user's email address.
    pub email: String,
    /// The user's hashed password.
    pub password: String,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

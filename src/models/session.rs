use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_cookies::cookie::SameSite;

/// The claims carried by a session token.
///
/// Built fresh for every issued session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The ID of the user this session belongs to.
    #[serde(rename = "userId")]
    pub subject_id: String,
    /// The user's email address, as given by the caller.
    #[serde(rename = "email")]
    pub subject_email: String,
    /// The timestamp when the session expires.
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}

/// The cookie that carries a signed session token to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    /// The signed, compact token.
    pub value: String,
    pub http_only: bool,
    /// Only set in production.
    pub secure: bool,
    pub same_site: SameSite,
    pub path: &'static str,
    pub expires: DateTime<Utc>,
}

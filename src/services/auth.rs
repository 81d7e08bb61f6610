use crate::error::{AppError, Result};
use crate::models::user::User;
use crate::repositories::user as user_repo;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder,
};
use deadpool_postgres::Pool;
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// The memory cost for Argon2 in MB.
const ARGON2_MEMORY_MB: u32 = 19;
/// The number of iterations for Argon2.
const ARGON2_ITERATIONS: u32 = 2;
/// The parallelism factor for Argon2.
const ARGON2_PARALLELISM: u32 = 1;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn argon2() -> Result<Argon2<'static>> {
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        ParamsBuilder::new()
            .m_cost(ARGON2_MEMORY_MB * 1024)
            .t_cost(ARGON2_ITERATIONS)
            .p_cost(ARGON2_PARALLELISM)
            .build()
            .map_err(|e| AppError::Internal(format!("Argon2 params: {}", e)))?,
    ))
}

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash.
///
/// # Returns
///
/// A `Result` containing the PHC-formatted hash.
pub fn hash_password(password: &str) -> Result<String> {
    let mut password_bytes = password.as_bytes().to_vec();

    let mut salt_bytes = [0u8; 16];
    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::Internal(format!("Salt encoding error: {}", e)))?;

    let password_hash = argon2()?
        .hash_password(&password_bytes, &salt)
        .map_err(|e| AppError::Internal(format!("Argon2 hash error: {}", e)))?
        .to_string();

    password_bytes.zeroize();
    tracing::debug!("Password hashed successfully with Argon2");
    Ok(password_hash)
}

/// Verifies a password against a hash.
///
/// # Returns
///
/// A `Result` containing `true` if the password is valid, `false` otherwise.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let mut password_bytes = password.as_bytes().to_vec();
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Hash parse error: {}", e)))?;
    let result = Argon2::default()
        .verify_password(&password_bytes, &parsed_hash)
        .is_ok();

    password_bytes.zeroize();
    tracing::debug!("Password verification completed");
    Ok(result)
}

/// Registers a new user.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `email` - The user's email address.
/// * `password` - The user's plaintext password.
///
/// # Returns
///
/// A `Result` containing the created `User`.
pub async fn register_user(db: &Pool, email: &str, password: &str) -> Result<User> {
    tracing::debug!("🔐 Registering user: {}", email);

    if user_repo::find_by_email(db, email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let hashed_password = hash_password(password)?;
    let user = user_repo::create_user(db, email, &hashed_password).await?;

    tracing::info!("✅ User created with ID: {} at {}", user.id, user.created_at);
    Ok(user)
}

/// Authenticates a user.
///
/// Unknown emails and wrong passwords fail with the same message.
///
/// # Arguments
///
/// * `db` - The database connection pool.
/// * `email` - The user's email address.
/// * `password` - The user's plaintext password.
///
/// # Returns
///
/// A `Result` containing the authenticated `User`.
pub async fn authenticate_user(db: &Pool, email: &str, password: &str) -> Result<User> {
    tracing::debug!("🔐 Authenticating user: {}", email);

    let user = user_repo::find_by_email(db, email)
        .await?
        .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(password, &user.password)? {
        return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    tracing::info!("✅ User authenticated: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery", &hash).unwrap());
        assert!(!verify_password("correct horse batteries", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("whatever", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}

use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::session::SessionClaims;

/// How long an issued session stays valid: exactly 7 × 24h.
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Everything the signer needs besides the claims themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningConfig {
    pub algorithm: Algorithm,
    pub expires_in: Duration,
    pub issued_at: DateTime<Utc>,
}

impl SigningConfig {
    /// HS256 with the standard session lifetime, issued at `issued_at`.
    pub fn session(issued_at: DateTime<Utc>) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            expires_in: Duration::seconds(SESSION_TTL_SECS),
            issued_at,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + self.expires_in
    }
}

/// The JWT payload: session claims plus the registered `iat`/`exp` claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedClaims {
    #[serde(flatten)]
    pub session: SessionClaims,
    pub iat: i64,
    pub exp: i64,
}

/// Turns session claims into a compact signed token.
pub trait TokenSigner: Send + Sync {
    fn sign(
        &self,
        claims: &SessionClaims,
        config: &SigningConfig,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Signs tokens with a symmetric HMAC key.
pub struct HmacSigner {
    key: EncodingKey,
}

impl HmacSigner {
    /// Creates a signer from raw key material. Empty keys are rejected.
    pub fn from_secret(secret: &[u8]) -> Result<Self> {
        if secret.is_empty() {
            return Err(AppError::Signing("Signing key must not be empty".to_string()));
        }

        Ok(Self {
            key: EncodingKey::from_secret(secret),
        })
    }
}

impl TokenSigner for HmacSigner {
    fn sign(
        &self,
        claims: &SessionClaims,
        config: &SigningConfig,
    ) -> impl Future<Output = Result<String>> + Send {
        let payload = SignedClaims {
            session: claims.clone(),
            iat: config.issued_at.timestamp(),
            exp: config.expires_at().timestamp(),
        };
        let algorithm = config.algorithm;

        async move {
            if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
                return Err(AppError::Signing(format!(
                    "Unsupported algorithm for HMAC signer: {:?}",
                    algorithm
                )));
            }

            let token = jsonwebtoken::encode(&Header::new(algorithm), &payload, &self.key)
                .map_err(|e| AppError::Signing(format!("JWT encoding failed: {}", e)))?;

            tracing::debug!("🔏 Session token signed ({:?})", algorithm);
            Ok(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const SECRET: &[u8] = b"test-signing-secret";

    fn claims_at(issued_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            subject_id: "user-123".to_string(),
            subject_email: "test@example.com".to_string(),
            expires_at: issued_at + Duration::seconds(SESSION_TTL_SECS),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation
    }

    #[test]
    fn session_config_spans_seven_days() {
        let issued_at = Utc.with_ymd_and_hms(2025, 3, 29, 12, 0, 0).unwrap();
        let config = SigningConfig::session(issued_at);

        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.expires_in, Duration::days(7));
        // Fixed duration, not calendar days: DST boundaries do not matter in UTC.
        assert_eq!(
            config.expires_at(),
            Utc.with_ymd_and_hms(2025, 4, 5, 12, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn signs_hs256_token_with_iat_and_exp() {
        let issued_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let claims = claims_at(issued_at);
        let config = SigningConfig::session(issued_at);

        let signer = HmacSigner::from_secret(SECRET).unwrap();
        let token = signer.sign(&claims, &config).await.unwrap();

        let header = decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);

        let decoded =
            decode::<SignedClaims>(&token, &DecodingKey::from_secret(SECRET), &validation())
                .unwrap()
                .claims;

        assert_eq!(decoded.session, claims);
        assert_eq!(decoded.iat, issued_at.timestamp());
        assert_eq!(decoded.exp, issued_at.timestamp() + SESSION_TTL_SECS);
        assert_eq!(decoded.exp, decoded.session.expires_at.timestamp());
    }

    #[tokio::test]
    async fn payload_uses_wire_field_names() {
        let issued_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let signer = HmacSigner::from_secret(SECRET).unwrap();
        let token = signer
            .sign(&claims_at(issued_at), &SigningConfig::session(issued_at))
            .await
            .unwrap();

        let raw = decode::<serde_json::Value>(&token, &DecodingKey::from_secret(SECRET), &validation())
            .unwrap()
            .claims;

        assert_eq!(raw["userId"], "user-123");
        assert_eq!(raw["email"], "test@example.com");
        assert_eq!(raw["expiresAt"], "2025-01-08T00:00:00Z");
        assert!(raw.get("subject_id").is_none());
    }

    #[tokio::test]
    async fn token_is_rejected_under_another_key() {
        let issued_at = Utc::now();
        let signer = HmacSigner::from_secret(SECRET).unwrap();
        let token = signer
            .sign(&claims_at(issued_at), &SigningConfig::session(issued_at))
            .await
            .unwrap();

        let result = decode::<SignedClaims>(
            &token,
            &DecodingKey::from_secret(b"some-other-secret"),
            &validation(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(
            HmacSigner::from_secret(b""),
            Err(AppError::Signing(_))
        ));
    }

    #[tokio::test]
    async fn non_hmac_algorithm_is_a_signing_failure() {
        let issued_at = Utc::now();
        let mut config = SigningConfig::session(issued_at);
        config.algorithm = Algorithm::RS256;

        let signer = HmacSigner::from_secret(SECRET).unwrap();
        let result = signer.sign(&claims_at(issued_at), &config).await;
        assert!(matches!(result, Err(AppError::Signing(_))));
    }
}

use chrono::{DateTime, Utc};
use tower_cookies::cookie::time::OffsetDateTime;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use crate::config::Environment;
use crate::crypto::jwt::{SigningConfig, TokenSigner};
use crate::error::{AppError, Result};
use crate::models::session::{SessionClaims, SessionCookie};

/// The name of the cookie that carries the session token.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// A source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The response-side cookie store of the current request.
pub trait CookieJar {
    fn set_cookie(&self, cookie: SessionCookie) -> Result<()>;
}

impl SessionCookie {
    /// Converts into a `tower_cookies` cookie ready to be added to a response.
    pub fn into_cookie(self) -> Result<Cookie<'static>> {
        let expires = OffsetDateTime::from_unix_timestamp(self.expires.timestamp())
            .map_err(|e| AppError::Transport(format!("Cookie expiry out of range: {}", e)))?;

        let mut cookie = Cookie::new(self.name, self.value);
        cookie.set_http_only(self.http_only);
        cookie.set_secure(self.secure);
        cookie.set_same_site(self.same_site);
        cookie.set_path(self.path);
        cookie.set_expires(expires);

        Ok(cookie)
    }
}

impl CookieJar for Cookies {
    fn set_cookie(&self, cookie: SessionCookie) -> Result<()> {
        self.add(cookie.into_cookie()?);
        Ok(())
    }
}

/// Mints signed session tokens and hands them to the client as cookies.
pub struct SessionIssuer<C, S> {
    clock: C,
    signer: S,
    environment: Environment,
}

impl<C: Clock, S: TokenSigner> SessionIssuer<C, S> {
    pub fn new(clock: C, signer: S, environment: Environment) -> Self {
        Self {
            clock,
            signer,
            environment,
        }
    }

    /// Issues a session for the given subject and writes its cookie to `jar`.
    ///
    /// The token is fully signed before the jar is touched; if signing fails
    /// no cookie is written.
    ///
    /// # Arguments
    ///
    /// * `jar` - The cookie store of the current response.
    /// * `subject_id` - The user's ID, stored unchanged.
    /// * `subject_email` - The user's email, stored unchanged.
    pub async fn issue_session<J>(
        &self,
        jar: &J,
        subject_id: &str,
        subject_email: &str,
    ) -> Result<()>
    where
        J: CookieJar + ?Sized,
    {
        let signing = SigningConfig::session(self.clock.now());

        let claims = SessionClaims {
            subject_id: subject_id.to_string(),
            subject_email: subject_email.to_string(),
            expires_at: signing.expires_at(),
        };

        let token = self.signer.sign(&claims, &signing).await?;

        jar.set_cookie(SessionCookie {
            name: SESSION_COOKIE_NAME,
            value: token,
            http_only: true,
            secure: self.environment.is_production(),
            same_site: SameSite::Lax,
            path: "/",
            expires: claims.expires_at,
        })?;

        tracing::info!(
            "✅ Session issued for user: {} (expires {})",
            claims.subject_id,
            claims.expires_at
        );

        Ok(())
    }
}

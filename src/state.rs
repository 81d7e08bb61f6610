use deadpool_postgres::Pool;
use std::sync::Arc;
use crate::config::Config;
use crate::crypto::jwt::HmacSigner;
use crate::error::Result;
use crate::services::session::{SessionIssuer, SystemClock};

/// The session issuer used by the running server.
pub type AppSessionIssuer = SessionIssuer<SystemClock, HmacSigner>;

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: Pool,
    /// The application's configuration.
    pub config: Config,
    /// Issues session cookies after successful authentication.
    pub sessions: Arc<AppSessionIssuer>,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_url, config.db_pool_size)?;
        tracing::info!(
            "✅ PostgreSQL Pool initialized with deadpool-postgres (max {})",
            config.db_pool_size
        );

        let signer = HmacSigner::from_secret(&config.jwt_secret)?;
        let sessions = SessionIssuer::new(SystemClock, signer, config.environment.clone());
        tracing::info!(
            "✅ Session issuer initialized (environment: {})",
            config.environment
        );

        Ok(AppState {
            db,
            config: config.clone(),
            sessions: Arc::new(sessions),
        })
    }
}

use axum::{routing::post, Router};
use tower_cookies::CookieManagerLayer;

use crate::{handlers, state::AppState};

/// Builds the authentication API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/signup", post(handlers::auth::sign_up))
        .route("/api/auth/signin", post(handlers::auth::sign_in))
        .route("/api/auth/signout", post(handlers::auth::sign_out))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

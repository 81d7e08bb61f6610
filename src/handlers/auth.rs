use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garde::Validate;
use serde::{Deserialize, Serialize};
use tower_cookies::cookie::time::Duration;
use tower_cookies::{Cookie, Cookies};

use crate::{
    error::Result,
    services::auth as auth_service,
    services::session::SESSION_COOKIE_NAME,
    state::AppState,
    validation::auth::validate_payload,
};

/// The request payload for user registration.
#[derive(Deserialize, Validate)]
pub struct SignUpRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8, max = 128))]
    pub password: String,
}

/// The request payload for user login.
#[derive(Deserialize, Validate)]
pub struct SignInRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

/// The response payload for authentication-related requests.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// Handles user registration.
#[axum::debug_handler]
pub async fn sign_up(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<SignUpRequest>,
) -> Result<Response> {
    tracing::info!("📝 Sign-up attempt for: {}", payload.email);
    validate_payload(&payload)?;

    let user = auth_service::register_user(&state.db, &payload.email, &payload.password).await?;

    state
        .sessions
        .issue_session(&cookies, &user.id.to_string(), &user.email)
        .await?;

    tracing::info!("✅ User registered: {}", user.id);

    let response = AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Handles user login.
#[axum::debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<SignInRequest>,
) -> Result<Response> {
    tracing::info!("🔐 Sign-in attempt for: {}", payload.email);
    validate_payload(&payload)?;

    let user =
        auth_service::authenticate_user(&state.db, &payload.email, &payload.password).await?;

    state
        .sessions
        .issue_session(&cookies, &user.id.to_string(), &user.email)
        .await?;

    tracing::info!("✅ User logged in: {}", user.id);

    let response = AuthResponse {
        success: true,
        message: "Login successful".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user logout by clearing the session cookie.
#[axum::debug_handler]
pub async fn sign_out(cookies: Cookies) -> Result<Response> {
    let mut session_cookie = Cookie::new(SESSION_COOKIE_NAME, "");
    session_cookie.set_max_age(Duration::seconds(0));
    session_cookie.set_path("/");
    cookies.remove(session_cookie);

    tracing::info!("👋 Session cookie cleared");

    let response = AuthResponse {
        success: true,
        message: "Logout successful".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

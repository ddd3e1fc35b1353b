//! Handlers for the admin password gate.
//!
//! One shared password unlocks the admin area; a successful login sets an
//! HttpOnly session cookie (see [`crate::auth::session`]).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use korin_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::session::{self, ADMIN_COOKIE};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

/// POST /api/v1/admin/auth
///
/// Verify the shared admin password and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let config = &state.config;

    if config.admin_password.is_empty() {
        return Err(AppError::InternalError(
            "ADMIN_PASSWORD is not configured".into(),
        ));
    }

    if !session::password_matches(&input.password, &config.admin_password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Incorrect password".into(),
        )));
    }

    let token = session::mint_token(&config.session_secret, config.session_ttl_secs);
    let cookie = format!(
        "{ADMIN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.session_ttl_secs
    );

    tracing::info!("Admin login succeeded");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthStatus {
            authenticated: true,
        }),
    ))
}

/// GET /api/v1/admin/auth
///
/// Report whether the request carries a valid admin session. Unauthenticated
/// requests get 401 so the admin UI can redirect to the login form.
pub async fn status(State(state): State<AppState>, parts: Parts) -> impl IntoResponse {
    let authenticated = session::session_cookie(&parts)
        .map(|token| session::verify_token(&state.config.session_secret, &token))
        .unwrap_or(false);

    let status = if authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    (status, Json(AuthStatus { authenticated }))
}

/// DELETE /api/v1/admin/auth
///
/// Clear the session cookie.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{ADMIN_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AuthStatus {
            authenticated: false,
        }),
    )
}

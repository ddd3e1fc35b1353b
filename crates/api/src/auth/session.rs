//! Admin session cookie handling.
//!
//! The admin area is gated by one shared password. A successful login mints
//! a stateless token `"<expiry-unix>.<hmac-sha256-hex>"` carried in an
//! HttpOnly cookie; verification recomputes the tag and checks the expiry,
//! so no session table is needed and a restart with the same secret keeps
//! sessions valid.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use hmac::{Hmac, Mac};
use korin_core::error::CoreError;
use sha2::Sha256;

use crate::error::AppError;
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Name of the admin session cookie.
pub const ADMIN_COOKIE: &str = "korin_admin";

/// Mint a session token that expires `ttl_secs` from now.
pub fn mint_token(secret: &str, ttl_secs: u64) -> String {
    let expires_at = chrono::Utc::now().timestamp() + ttl_secs as i64;
    let tag = sign(secret, expires_at);
    format!("{expires_at}.{tag}")
}

/// Verify a session token's signature and expiry.
pub fn verify_token(secret: &str, token: &str) -> bool {
    let Some((expiry, tag)) = token.split_once('.') else {
        return false;
    };
    let Ok(expires_at) = expiry.parse::<i64>() else {
        return false;
    };
    if expires_at <= chrono::Utc::now().timestamp() {
        return false;
    }

    let Ok(tag_bytes) = hex::decode(tag) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(expiry.as_bytes());
    mac.verify_slice(&tag_bytes).is_ok()
}

/// Compare the submitted password against the configured one.
///
/// Comparison happens on SHA-256 digests of both values.
pub fn password_matches(submitted: &str, configured: &str) -> bool {
    use sha2::Digest;

    let submitted_digest = Sha256::digest(submitted.as_bytes());
    let configured_digest = Sha256::digest(configured.as_bytes());
    submitted_digest == configured_digest
}

fn sign(secret: &str, expires_at: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(expires_at.to_string().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Extract the admin session cookie value from request headers, if present.
pub fn session_cookie(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == ADMIN_COOKIE).then(|| value.to_string())
    })
}

/// Authenticated admin session extracted from the request cookie.
///
/// Use this as an extractor parameter in any handler that requires the
/// admin gate:
///
/// ```ignore
/// async fn save_section(_session: AdminSession, ...) -> AppResult<impl IntoResponse> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_cookie(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Admin session required".into()))
        })?;

        if !verify_token(&state.config.session_secret, &token) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired admin session".into(),
            )));
        }

        Ok(AdminSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_token_verifies_with_same_secret() {
        let token = mint_token("secret", 60);
        assert!(verify_token("secret", &token));
    }

    #[test]
    fn token_fails_with_other_secret() {
        let token = mint_token("secret", 60);
        assert!(!verify_token("other", &token));
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired_at = chrono::Utc::now().timestamp() - 10;
        let token = format!("{expired_at}.{}", sign("secret", expired_at));
        assert!(!verify_token("secret", &token));
    }

    #[test]
    fn tampered_expiry_is_rejected() {
        let token = mint_token("secret", 60);
        let (_, tag) = token.split_once('.').unwrap();
        let far_future = chrono::Utc::now().timestamp() + 1_000_000;
        assert!(!verify_token("secret", &format!("{far_future}.{tag}")));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(!verify_token("secret", ""));
        assert!(!verify_token("secret", "no-dot"));
        assert!(!verify_token("secret", "123."));
        assert!(!verify_token("secret", "abc.def"));
    }

    #[test]
    fn password_comparison() {
        assert!(password_matches("hunter2", "hunter2"));
        assert!(!password_matches("hunter2", "hunter3"));
        assert!(!password_matches("", "hunter2"));
    }
}

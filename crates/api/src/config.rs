/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Shared admin password from `ADMIN_PASSWORD`. Login is refused while
    /// this is empty (the deployment is considered unconfigured).
    pub admin_password: String,
    /// HMAC key for admin session cookies. When `SESSION_SECRET` is unset a
    /// random key is generated at startup, so sessions do not survive a
    /// restart.
    pub session_secret: String,
    /// Admin session lifetime in seconds (default: 24 hours).
    pub session_ttl_secs: u64,
    /// Contact-form relay endpoint. Submissions fail while unset.
    pub contact_relay_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_PASSWORD`       | (empty; login disabled)    |
    /// | `SESSION_SECRET`       | (random per process)       |
    /// | `SESSION_TTL_SECS`     | `86400`                    |
    /// | `CONTACT_RELAY_URL`    | (unset; contact disabled)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_default();

        let session_secret =
            std::env::var("SESSION_SECRET").unwrap_or_else(|_| generate_session_secret());

        let session_ttl_secs: u64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid u64");

        let contact_relay_url = std::env::var("CONTACT_RELAY_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_password,
            session_secret,
            session_ttl_secs,
            contact_relay_url,
        }
    }
}

/// Random per-process session key used when `SESSION_SECRET` is not set.
fn generate_session_secret() -> String {
    use rand::RngCore;

    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

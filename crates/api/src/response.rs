//! Shared response envelope for API handlers.
//!
//! Successful responses wrap their payload in `{ "data": ... }`. Using
//! [`DataResponse`] instead of ad-hoc `serde_json::json!` keeps the envelope
//! type-checked and consistent across handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

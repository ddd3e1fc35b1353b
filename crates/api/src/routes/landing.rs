//! Route definitions for the public landing reads.
//!
//! ```text
//! GET /landing            -> resolved landing page (?locale=ja|en)
//! GET /services/{slug}    -> service detail with its works bucket
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::landing;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/landing", get(landing::get_landing))
        .route("/services/{slug}", get(landing::get_service_detail))
}

//! Route definitions for the `/admin` surface.
//!
//! Everything except the auth endpoints is gated by the
//! [`crate::auth::session::AdminSession`] extractor on each handler.
//!
//! ```text
//! POST   /auth                                  -> login (public)
//! GET    /auth                                  -> session status (public)
//! DELETE /auth                                  -> logout (public)
//!
//! GET    /landing                               -> full bilingual aggregate
//! PUT    /sections                              -> save one section (tagged body)
//!
//! GET    /portfolio/buckets/{bucket}            -> one bucket's items
//! PUT    /portfolio/buckets/{bucket}            -> replace one bucket
//! POST   /portfolio/buckets/{bucket}/reorder    -> swap within a bucket
//! POST   /portfolio/items/{id}/relink           -> move an item between buckets
//!
//! POST   /services/reorder                      -> swap service display order
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin_auth, sections, services, works};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/auth",
            post(admin_auth::login)
                .get(admin_auth::status)
                .delete(admin_auth::logout),
        )
        .route("/landing", get(sections::get_admin_landing))
        .route("/sections", put(sections::save_section))
        .route(
            "/portfolio/buckets/{bucket}",
            get(works::get_bucket).put(works::save_bucket),
        )
        .route(
            "/portfolio/buckets/{bucket}/reorder",
            post(works::reorder_bucket),
        )
        .route("/portfolio/items/{id}/relink", post(works::relink_item))
        .route("/services/reorder", post(services::reorder_services))
}

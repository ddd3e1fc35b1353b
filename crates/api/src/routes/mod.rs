pub mod admin;
pub mod contact;
pub mod health;
pub mod landing;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /landing                                     resolved landing page (public)
/// /services/{slug}                             service detail (public)
/// /contact                                     contact relay (public, POST)
///
/// /admin/auth                                  login, status, logout
/// /admin/landing                               bilingual aggregate (session)
/// /admin/sections                              save one section (session)
/// /admin/portfolio/buckets/{bucket}            get, replace bucket (session)
/// /admin/portfolio/buckets/{bucket}/reorder    swap within bucket (session)
/// /admin/portfolio/items/{id}/relink           relink item (session)
/// /admin/services/reorder                      swap service order (session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public landing reads.
        .merge(landing::router())
        // Public contact relay.
        .merge(contact::router())
        // Admin auth + content editing.
        .nest("/admin", admin::router())
}

//! Admin handler for service display ordering.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use korin_core::landing::{ServiceItem, ServicesContent};
use korin_core::locale::LocalizedText;
use korin_core::portfolio;
use korin_db::repositories::ServiceRepo;

use crate::auth::session::AdminSession;
use crate::error::AppResult;
use crate::handlers::works::ReorderRequest;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/services/reorder
///
/// Swap a service with its neighbor in the top-level display order, using
/// the same single-step move primitive as works buckets. The whole services
/// section is rewritten so sort_order reflects the new list positions.
pub async fn reorder_services(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(request): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let intro = match ServiceRepo::get_meta(&state.pool).await? {
        Some(meta) => LocalizedText::new(meta.intro_ja, meta.intro_en),
        None => LocalizedText::default(),
    };
    let items: Vec<ServiceItem> = ServiceRepo::list_items(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let next = portfolio::reorder(&items, request.index, request.direction);
    let services = ServicesContent { intro, items: next };
    ServiceRepo::save(&state.pool, &services).await?;

    Ok(Json(DataResponse {
        data: services.items,
    }))
}

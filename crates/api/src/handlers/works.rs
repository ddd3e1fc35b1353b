//! Admin handlers for portfolio works buckets.
//!
//! A bucket is addressed by the route segment `{bucket}`: either a service
//! id or the literal `unassigned`. Bulk saves replace exactly one bucket;
//! relinking moves a single item between buckets and commits immediately.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use korin_core::error::CoreError;
use korin_core::landing::PortfolioItem;
use korin_core::portfolio::{
    self, BucketKey, MoveDirection,
};
use korin_db::repositories::{PortfolioRepo, ServiceRepo};
use serde::Deserialize;

use crate::auth::session::AdminSession;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Single-step move request, shared with the services reorder endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReorderRequest {
    pub index: usize,
    pub direction: MoveDirection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelinkRequest {
    pub target_service_id: String,
}

/// GET /api/v1/admin/portfolio/buckets/{bucket}
///
/// One bucket's items in display order.
pub async fn get_bucket(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(bucket): Path<String>,
) -> AppResult<impl IntoResponse> {
    let bucket = BucketKey::from_segment(&bucket);

    let items: Vec<PortfolioItem> = PortfolioRepo::fetch_ordered_bucket(&state.pool, &bucket)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/admin/portfolio/buckets/{bucket}
///
/// Replace one bucket's items with the submitted list. Every item passes the
/// validation gate; items in other buckets are untouched.
pub async fn save_bucket(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    Json(items): Json<Vec<PortfolioItem>>,
) -> AppResult<impl IntoResponse> {
    let bucket = BucketKey::from_segment(&bucket);

    let items: Vec<PortfolioItem> = items.into_iter().map(portfolio::normalize_item).collect();
    for item in &items {
        portfolio::validate_item(item)?;
    }

    // Compute the next aggregate state, then commit the written bucket's
    // slice of it. The engine stamps each item with the bucket's service id.
    let all: Vec<PortfolioItem> = PortfolioRepo::list_all_items(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let next = portfolio::replace_bucket(&all, &bucket, items);
    let next_bucket: Vec<PortfolioItem> = next
        .into_iter()
        .filter(|item| bucket.matches(item))
        .collect();

    let saved: Vec<PortfolioItem> = PortfolioRepo::upsert_bucket(&state.pool, &bucket, &next_bucket)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::info!(bucket = %bucket, count = saved.len(), "Works bucket saved");

    Ok(Json(DataResponse { data: saved }))
}

/// POST /api/v1/admin/portfolio/buckets/{bucket}/reorder
///
/// Swap an item with its neighbor inside one bucket. Out-of-bounds moves
/// are no-ops.
pub async fn reorder_bucket(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(bucket): Path<String>,
    Json(request): Json<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    let bucket = BucketKey::from_segment(&bucket);

    let items: Vec<PortfolioItem> = PortfolioRepo::fetch_ordered_bucket(&state.pool, &bucket)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let next = portfolio::reorder(&items, request.index, request.direction);
    let saved: Vec<PortfolioItem> = PortfolioRepo::upsert_bucket(&state.pool, &bucket, &next)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(DataResponse { data: saved }))
}

/// POST /api/v1/admin/portfolio/items/{id}/relink
///
/// Move one item to the end of another service's bucket. Fails with 404 and
/// no mutation when the target service does not exist.
pub async fn relink_item(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(request): Json<RelinkRequest>,
) -> AppResult<impl IntoResponse> {
    let services: Vec<korin_core::landing::ServiceItem> = ServiceRepo::list_items(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let all: Vec<PortfolioItem> = PortfolioRepo::list_all_items(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    // Plan the relink in memory first: this validates the target service and
    // the item, and computes the appended sort order.
    let (_, planned) = portfolio::relink(&all, &item_id, &request.target_service_id, &services)?;

    let saved = PortfolioRepo::relink_item(&state.pool, &item_id, &request.target_service_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: request.target_service_id.clone(),
        }))?;

    tracing::info!(
        item_id = %item_id,
        target_service_id = %request.target_service_id,
        sort_order = planned.sort_order,
        "Portfolio item relinked",
    );

    Ok(Json(DataResponse {
        data: PortfolioItem::from(saved),
    }))
}

//! Public read handlers for the landing site.
//!
//! Responses are resolved to one locale (`?locale=ja|en`, defaulting to
//! Japanese) with the standard empty-secondary fallback.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use korin_core::error::CoreError;
use korin_core::landing::{PortfolioItemView, ServiceView};
use korin_core::locale::Locale;
use korin_core::portfolio::BucketKey;
use korin_db::repositories::{LandingRepo, PortfolioRepo, ServiceRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

impl LocaleParams {
    fn locale(&self) -> Locale {
        Locale::from_param(self.locale.as_deref())
    }
}

/// GET /api/v1/landing
///
/// The full landing page, resolved to the requested locale. Sections that
/// have never been saved fall back to the seed content.
pub async fn get_landing(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let content = LandingRepo::load(&state.pool).await?;

    Ok(Json(DataResponse {
        data: content.resolve(params.locale()),
    }))
}

/// Service detail page payload: the service plus its ordered works bucket.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub service: ServiceView,
    pub works: Vec<PortfolioItemView>,
}

/// GET /api/v1/services/{slug}
///
/// One service by its public URL slug, with its works in display order.
pub async fn get_service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let locale = params.locale();

    let row = ServiceRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: slug,
        }))?;

    let bucket = BucketKey::Assigned(row.id.clone());
    let works = PortfolioRepo::fetch_ordered_bucket(&state.pool, &bucket)
        .await?
        .into_iter()
        .map(|item_row| korin_core::landing::PortfolioItem::from(item_row).resolve(locale))
        .collect();

    let service = korin_core::landing::ServiceItem::from(row).resolve(locale);

    Ok(Json(DataResponse {
        data: ServiceDetail { service, works },
    }))
}

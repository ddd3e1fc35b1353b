//! Admin handlers for whole-section saves.
//!
//! The save endpoint takes a [`SectionUpdate`] tagged by section kind and
//! dispatches with an exhaustive match, so every section has a typed payload
//! and its own save path. Localized fields are normalized for save before
//! any persistence call.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use korin_core::portfolio::validate_service;
use korin_core::section::SectionUpdate;
use korin_db::repositories::{ContentRepo, HeroRepo, LandingRepo, PortfolioRepo, ServiceRepo};
use serde::Serialize;

use crate::auth::session::AdminSession;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/landing
///
/// The full bilingual aggregate for the editor (no locale resolution).
pub async fn get_admin_landing(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let content = LandingRepo::load(&state.pool).await?;

    Ok(Json(DataResponse { data: content }))
}

#[derive(Debug, Serialize)]
pub struct SectionSaved {
    pub section: &'static str,
}

/// PUT /api/v1/admin/sections
///
/// Save one section. The body is tagged by `"section"`; see
/// [`SectionUpdate`].
pub async fn save_section(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(update): Json<SectionUpdate>,
) -> AppResult<impl IntoResponse> {
    let section = update.kind();

    match update {
        SectionUpdate::Hero(hero) => {
            HeroRepo::upsert(&state.pool, &hero.normalize_for_save()).await?;
        }
        SectionUpdate::About(about) => {
            ContentRepo::save_about(&state.pool, &about.normalize_for_save()).await?;
        }
        SectionUpdate::Services(services) => {
            let services = services.normalize_for_save();
            for item in &services.items {
                validate_service(item)?;
            }
            ServiceRepo::save(&state.pool, &services).await?;
        }
        SectionUpdate::Portfolio(meta) => {
            PortfolioRepo::upsert_meta(&state.pool, &meta.normalize_for_save()).await?;
        }
        SectionUpdate::BrandPhilosophy(brand_philosophy) => {
            ContentRepo::save_brand_philosophy(
                &state.pool,
                &brand_philosophy.normalize_for_save(),
            )
            .await?;
        }
    }

    tracing::info!(section, "Landing section saved");

    Ok(Json(DataResponse {
        data: SectionSaved { section },
    }))
}

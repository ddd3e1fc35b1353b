//! JSON section store row model (`lp_content`).
//!
//! Sections without dedicated tables (about, brand philosophy) live together
//! in one JSONB document, merged on save so saving one section never clobbers
//! another.

use korin_core::landing::{AboutContent, BrandPhilosophyContent};
use korin_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lp_content` table (singleton, id `'default'`).
#[derive(Debug, Clone, FromRow)]
pub struct ContentRow {
    pub id: String,
    pub content: serde_json::Value,
    pub updated_at: Timestamp,
}

/// Typed shape of the `content` JSONB document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSections {
    pub about: Option<AboutContent>,
    pub brand_philosophy: Option<BrandPhilosophyContent>,
}

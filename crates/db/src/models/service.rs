//! Services section row models.

use korin_core::landing::ServiceItem;
use korin_core::locale::LocalizedText;
use korin_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lp_services` table (singleton, id `'default'`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServicesMetaRow {
    pub id: String,
    pub intro_ja: String,
    pub intro_en: String,
    pub updated_at: Timestamp,
}

/// A row from the `lp_service_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceItemRow {
    pub id: String,
    pub slug: String,
    pub title_ja: String,
    pub title_en: String,
    pub description_ja: String,
    pub description_en: String,
    pub background_color: String,
    pub gallery: Vec<String>,
    pub sort_order: i64,
    pub updated_at: Timestamp,
}

impl From<ServiceItemRow> for ServiceItem {
    fn from(row: ServiceItemRow) -> Self {
        ServiceItem {
            id: row.id,
            slug: row.slug,
            title: LocalizedText::new(row.title_ja, row.title_en),
            description: LocalizedText::new(row.description_ja, row.description_en),
            background_color: row.background_color,
            gallery: row.gallery,
        }
    }
}

//! Portfolio section row models.

use korin_core::landing::PortfolioItem;
use korin_core::locale::LocalizedText;
use korin_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lp_portfolio` table (singleton, id `'default'`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioMetaRow {
    pub id: String,
    pub heading_ja: String,
    pub heading_en: String,
    pub subheading_ja: String,
    pub subheading_en: String,
    pub updated_at: Timestamp,
}

/// A row from the `lp_portfolio_items` table.
///
/// `service_id = NULL` is the unassigned bucket; `sort_order` is the position
/// within the row's bucket.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItemRow {
    pub id: String,
    pub title_ja: String,
    pub title_en: String,
    pub description_ja: String,
    pub description_en: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub service_id: Option<String>,
    pub sort_order: i64,
    pub updated_at: Timestamp,
}

impl From<PortfolioItemRow> for PortfolioItem {
    fn from(row: PortfolioItemRow) -> Self {
        PortfolioItem {
            id: row.id,
            title: LocalizedText::new(row.title_ja, row.title_en),
            description: LocalizedText::new(row.description_ja, row.description_en),
            image_url: row.image_url,
            link_url: row.link_url,
            service_id: row.service_id,
            sort_order: row.sort_order,
        }
    }
}

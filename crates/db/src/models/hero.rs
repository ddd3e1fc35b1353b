//! Hero section row model.

use korin_core::landing::HeroContent;
use korin_core::locale::LocalizedText;
use korin_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `lp_hero` table (singleton, id `'default'`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroRow {
    pub id: String,
    pub heading_ja: String,
    pub heading_en: String,
    pub subheading_ja: String,
    pub subheading_en: String,
    pub cta_label_ja: String,
    pub cta_label_en: String,
    pub cta_link: String,
    pub image_url: String,
    pub updated_at: Timestamp,
}

impl From<HeroRow> for HeroContent {
    fn from(row: HeroRow) -> Self {
        HeroContent {
            heading: LocalizedText::new(row.heading_ja, row.heading_en),
            subheading: LocalizedText::new(row.subheading_ja, row.subheading_en),
            cta_label: LocalizedText::new(row.cta_label_ja, row.cta_label_en),
            cta_link: row.cta_link,
            image_url: row.image_url,
        }
    }
}

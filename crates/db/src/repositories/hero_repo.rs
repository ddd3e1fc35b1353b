//! Repository for the `lp_hero` singleton row.

use korin_core::landing::HeroContent;
use sqlx::PgPool;

use crate::models::hero::HeroRow;
use crate::SINGLETON_ROW_ID;

/// Column list for `lp_hero` queries.
const COLUMNS: &str = "id, heading_ja, heading_en, subheading_ja, subheading_en, \
    cta_label_ja, cta_label_en, cta_link, image_url, updated_at";

pub struct HeroRepo;

impl HeroRepo {
    /// Fetch the hero section, if it has ever been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<HeroRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lp_hero WHERE id = $1");
        sqlx::query_as::<_, HeroRow>(&query)
            .bind(SINGLETON_ROW_ID)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the hero section.
    pub async fn upsert(pool: &PgPool, hero: &HeroContent) -> Result<HeroRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO lp_hero \
                (id, heading_ja, heading_en, subheading_ja, subheading_en, \
                 cta_label_ja, cta_label_en, cta_link, image_url, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, now()) \
             ON CONFLICT (id) DO UPDATE SET \
                heading_ja = EXCLUDED.heading_ja, \
                heading_en = EXCLUDED.heading_en, \
                subheading_ja = EXCLUDED.subheading_ja, \
                subheading_en = EXCLUDED.subheading_en, \
                cta_label_ja = EXCLUDED.cta_label_ja, \
                cta_label_en = EXCLUDED.cta_label_en, \
                cta_link = EXCLUDED.cta_link, \
                image_url = EXCLUDED.image_url, \
                updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroRow>(&query)
            .bind(SINGLETON_ROW_ID)
            .bind(&hero.heading.ja)
            .bind(&hero.heading.en)
            .bind(&hero.subheading.ja)
            .bind(&hero.subheading.en)
            .bind(&hero.cta_label.ja)
            .bind(&hero.cta_label.en)
            .bind(&hero.cta_link)
            .bind(&hero.image_url)
            .fetch_one(pool)
            .await
    }
}

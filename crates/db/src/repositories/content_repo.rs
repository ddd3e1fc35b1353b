//! Repository for the `lp_content` JSON section store.
//!
//! About and brand philosophy share one JSONB document. Saves read the
//! current document and merge the edited section into it, so sections never
//! clobber each other.

use korin_core::landing::{AboutContent, BrandPhilosophyContent};
use sqlx::PgPool;

use crate::models::content::ContentSections;
use crate::SINGLETON_ROW_ID;

pub struct ContentRepo;

impl ContentRepo {
    /// Fetch the decoded section document. A missing row or an undecodable
    /// document yields the empty default (sections fall back to seed content
    /// upstream).
    pub async fn get(pool: &PgPool) -> Result<ContentSections, sqlx::Error> {
        let value = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT content FROM lp_content WHERE id = $1",
        )
        .bind(SINGLETON_ROW_ID)
        .fetch_optional(pool)
        .await?;

        Ok(value
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default())
    }

    /// Merge the about section into the document and upsert it.
    pub async fn save_about(pool: &PgPool, about: &AboutContent) -> Result<(), sqlx::Error> {
        let mut sections = Self::get(pool).await?;
        sections.about = Some(about.clone());
        Self::upsert(pool, &sections).await
    }

    /// Merge the brand philosophy section into the document and upsert it.
    pub async fn save_brand_philosophy(
        pool: &PgPool,
        brand_philosophy: &BrandPhilosophyContent,
    ) -> Result<(), sqlx::Error> {
        let mut sections = Self::get(pool).await?;
        sections.brand_philosophy = Some(brand_philosophy.clone());
        Self::upsert(pool, &sections).await
    }

    async fn upsert(pool: &PgPool, sections: &ContentSections) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO lp_content (id, content, updated_at) \
             VALUES ($1, $2, now()) \
             ON CONFLICT (id) DO UPDATE SET \
                content = EXCLUDED.content, \
                updated_at = now()",
        )
        .bind(SINGLETON_ROW_ID)
        .bind(sqlx::types::Json(sections))
        .execute(pool)
        .await?;
        Ok(())
    }
}

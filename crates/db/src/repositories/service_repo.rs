//! Repository for the `lp_services` meta row and `lp_service_items` table.

use korin_core::landing::ServicesContent;
use sqlx::PgPool;

use crate::models::service::{ServiceItemRow, ServicesMetaRow};
use crate::SINGLETON_ROW_ID;

/// Column list for `lp_service_items` queries.
const ITEM_COLUMNS: &str = "id, slug, title_ja, title_en, description_ja, description_en, \
    background_color, gallery, sort_order, updated_at";

pub struct ServiceRepo;

impl ServiceRepo {
    /// Fetch the services intro row, if it has ever been saved.
    pub async fn get_meta(pool: &PgPool) -> Result<Option<ServicesMetaRow>, sqlx::Error> {
        sqlx::query_as::<_, ServicesMetaRow>(
            "SELECT id, intro_ja, intro_en, updated_at FROM lp_services WHERE id = $1",
        )
        .bind(SINGLETON_ROW_ID)
        .fetch_optional(pool)
        .await
    }

    /// List all services in display order.
    pub async fn list_items(pool: &PgPool) -> Result<Vec<ServiceItemRow>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM lp_service_items ORDER BY sort_order, id");
        sqlx::query_as::<_, ServiceItemRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one service by its public URL slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ServiceItemRow>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM lp_service_items WHERE slug = $1");
        sqlx::query_as::<_, ServiceItemRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Replace the whole services section in one transaction.
    ///
    /// Upserts the intro row, replaces all service rows (sort_order = list
    /// position), then migrates portfolio items whose service no longer
    /// exists to the unassigned bucket. Items linked to surviving service
    /// ids keep their links because editor ids are stable across saves.
    pub async fn save(pool: &PgPool, services: &ServicesContent) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO lp_services (id, intro_ja, intro_en, updated_at) \
             VALUES ($1, $2, $3, now()) \
             ON CONFLICT (id) DO UPDATE SET \
                intro_ja = EXCLUDED.intro_ja, \
                intro_en = EXCLUDED.intro_en, \
                updated_at = now()",
        )
        .bind(SINGLETON_ROW_ID)
        .bind(&services.intro.ja)
        .bind(&services.intro.en)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM lp_service_items")
            .execute(&mut *tx)
            .await?;

        for (index, item) in services.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO lp_service_items \
                    (id, slug, title_ja, title_en, description_ja, description_en, \
                     background_color, gallery, sort_order) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(&item.id)
            .bind(&item.slug)
            .bind(&item.title.ja)
            .bind(&item.title.en)
            .bind(&item.description.ja)
            .bind(&item.description.en)
            .bind(&item.background_color)
            .bind(&item.gallery)
            .bind(index as i64)
            .execute(&mut *tx)
            .await?;
        }

        // Orphan migration: items pointing at a removed service move to the
        // unassigned bucket instead of dangling.
        let surviving_ids: Vec<String> = services.items.iter().map(|i| i.id.clone()).collect();
        let migrated = sqlx::query(
            "UPDATE lp_portfolio_items SET service_id = NULL, updated_at = now() \
             WHERE service_id IS NOT NULL AND NOT (service_id = ANY($1))",
        )
        .bind(&surviving_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if migrated.rows_affected() > 0 {
            tracing::info!(
                orphaned = migrated.rows_affected(),
                "Portfolio items moved to the unassigned bucket after services save",
            );
        }

        Ok(())
    }
}

//! Repository for the `lp_portfolio` meta row and `lp_portfolio_items` table.
//!
//! Bucket writes follow the delete-then-insert pattern inside a transaction:
//! only rows belonging to the written bucket are deleted, so every other
//! bucket's rows are untouched and the new bucket state becomes visible
//! atomically.

use korin_core::landing::{PortfolioItem, PortfolioMeta};
use korin_core::portfolio::BucketKey;
use sqlx::PgPool;

use crate::models::portfolio::{PortfolioItemRow, PortfolioMetaRow};
use crate::SINGLETON_ROW_ID;

/// Column list for `lp_portfolio_items` queries.
const ITEM_COLUMNS: &str = "id, title_ja, title_en, description_ja, description_en, \
    image_url, link_url, service_id, sort_order, updated_at";

pub struct PortfolioRepo;

impl PortfolioRepo {
    // -----------------------------------------------------------------------
    // Section meta
    // -----------------------------------------------------------------------

    /// Fetch the portfolio heading row, if it has ever been saved.
    pub async fn get_meta(pool: &PgPool) -> Result<Option<PortfolioMetaRow>, sqlx::Error> {
        sqlx::query_as::<_, PortfolioMetaRow>(
            "SELECT id, heading_ja, heading_en, subheading_ja, subheading_en, updated_at \
             FROM lp_portfolio WHERE id = $1",
        )
        .bind(SINGLETON_ROW_ID)
        .fetch_optional(pool)
        .await
    }

    /// Insert or replace the portfolio heading row.
    pub async fn upsert_meta(
        pool: &PgPool,
        meta: &PortfolioMeta,
    ) -> Result<PortfolioMetaRow, sqlx::Error> {
        sqlx::query_as::<_, PortfolioMetaRow>(
            "INSERT INTO lp_portfolio \
                (id, heading_ja, heading_en, subheading_ja, subheading_en, updated_at) \
             VALUES ($1, $2, $3, $4, $5, now()) \
             ON CONFLICT (id) DO UPDATE SET \
                heading_ja = EXCLUDED.heading_ja, \
                heading_en = EXCLUDED.heading_en, \
                subheading_ja = EXCLUDED.subheading_ja, \
                subheading_en = EXCLUDED.subheading_en, \
                updated_at = now() \
             RETURNING id, heading_ja, heading_en, subheading_ja, subheading_en, updated_at",
        )
        .bind(SINGLETON_ROW_ID)
        .bind(&meta.heading.ja)
        .bind(&meta.heading.en)
        .bind(&meta.subheading.ja)
        .bind(&meta.subheading.en)
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Item reads
    // -----------------------------------------------------------------------

    /// List every portfolio item across all buckets, in display order.
    pub async fn list_all_items(pool: &PgPool) -> Result<Vec<PortfolioItemRow>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM lp_portfolio_items ORDER BY sort_order, id");
        sqlx::query_as::<_, PortfolioItemRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one bucket's items in display order.
    pub async fn fetch_ordered_bucket(
        pool: &PgPool,
        bucket: &BucketKey,
    ) -> Result<Vec<PortfolioItemRow>, sqlx::Error> {
        let query = match bucket {
            BucketKey::Unassigned => format!(
                "SELECT {ITEM_COLUMNS} FROM lp_portfolio_items \
                 WHERE service_id IS NULL ORDER BY sort_order, id"
            ),
            BucketKey::Assigned(_) => format!(
                "SELECT {ITEM_COLUMNS} FROM lp_portfolio_items \
                 WHERE service_id = $1 ORDER BY sort_order, id"
            ),
        };
        let mut q = sqlx::query_as::<_, PortfolioItemRow>(&query);
        if let Some(service_id) = bucket.service_id() {
            q = q.bind(service_id.to_string());
        }
        q.fetch_all(pool).await
    }

    // -----------------------------------------------------------------------
    // Bucket writes
    // -----------------------------------------------------------------------

    /// Replace one bucket's rows with `items`, in one transaction.
    ///
    /// Deletes only the rows belonging to `bucket`, then inserts `items` in
    /// order with `sort_order` = position and `service_id` = the bucket's
    /// key. Returns the inserted rows in order.
    pub async fn upsert_bucket(
        pool: &PgPool,
        bucket: &BucketKey,
        items: &[PortfolioItem],
    ) -> Result<Vec<PortfolioItemRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        match bucket.service_id() {
            None => {
                sqlx::query("DELETE FROM lp_portfolio_items WHERE service_id IS NULL")
                    .execute(&mut *tx)
                    .await?;
            }
            Some(service_id) => {
                sqlx::query("DELETE FROM lp_portfolio_items WHERE service_id = $1")
                    .bind(service_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        let mut saved = Vec::with_capacity(items.len());
        let insert_query = format!(
            "INSERT INTO lp_portfolio_items \
                (id, title_ja, title_en, description_ja, description_en, \
                 image_url, link_url, service_id, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ITEM_COLUMNS}"
        );
        for (index, item) in items.iter().enumerate() {
            let row = sqlx::query_as::<_, PortfolioItemRow>(&insert_query)
                .bind(&item.id)
                .bind(&item.title.ja)
                .bind(&item.title.en)
                .bind(&item.description.ja)
                .bind(&item.description.en)
                .bind(&item.image_url)
                .bind(&item.link_url)
                .bind(bucket.service_id())
                .bind(index as i64)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(row);
        }

        tx.commit().await?;
        Ok(saved)
    }

    /// Move one item to the end of another service's bucket (single-row
    /// update, committed immediately).
    ///
    /// Returns `None` without mutating anything when the target service or
    /// the item does not exist.
    pub async fn relink_item(
        pool: &PgPool,
        item_id: &str,
        target_service_id: &str,
    ) -> Result<Option<PortfolioItemRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let service_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lp_service_items WHERE id = $1")
                .bind(target_service_id)
                .fetch_one(&mut *tx)
                .await?;
        if service_exists == 0 {
            return Ok(None);
        }

        let next_sort_order = sqlx::query_scalar::<_, Option<i64>>(
            "SELECT MAX(sort_order) FROM lp_portfolio_items WHERE service_id = $1",
        )
        .bind(target_service_id)
        .fetch_one(&mut *tx)
        .await?
        .map_or(0, |max| max + 1);

        let update_query = format!(
            "UPDATE lp_portfolio_items \
             SET service_id = $2, sort_order = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING {ITEM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PortfolioItemRow>(&update_query)
            .bind(item_id)
            .bind(target_service_id)
            .bind(next_sort_order)
            .fetch_optional(&mut *tx)
            .await?;

        if row.is_some() {
            tx.commit().await?;
        }
        Ok(row)
    }
}

//! Persistence gateway for the korin landing CMS.
//!
//! Models mirror database rows (`FromRow`); repositories are zero-sized
//! structs whose async methods take `&PgPool` as the first argument. Bucket
//! writes are delete-then-insert inside a transaction so a bucket's new
//! state becomes visible atomically.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Fixed row id for singleton section tables (hero, services meta, ...).
pub const SINGLETON_ROW_ID: &str = "default";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

//! Database schema management for `agroweather-advisory`.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs`.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the append-only `search_history` table backing the
/// recent-searches endpoints. Safe to call on every startup; no-op if the
/// objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // One row per successful weather lookup, newest rows read first
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS search_history (
            id            SERIAL PRIMARY KEY,
            location_name TEXT        NOT NULL,
            search_date   TIMESTAMPTZ NOT NULL DEFAULT now()
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_search_history_search_date
            ON search_history (search_date DESC);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

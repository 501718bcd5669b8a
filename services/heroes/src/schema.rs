//! Startup schema for the heroes table

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// Create the heroes table and its indexes if they are absent
pub async fn init_schema(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER,
            secret_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_heroes_name ON heroes (name)")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_heroes_age ON heroes (age)")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    info!("Heroes schema is in place");
    Ok(())
}

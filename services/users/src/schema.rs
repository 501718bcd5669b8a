//! Startup schema for the users table

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

/// Create the users table, its unique constraints, and its indexes if they
/// are absent
///
/// Uniqueness of email and phone number is enforced here, by the database,
/// rather than by an application-level pre-read. A duplicate insert or
/// update fails at commit with nothing left behind.
pub async fn init_schema(pool: &PgPool) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id UUID PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            ph_number BIGINT NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL,
            UNIQUE (email, ph_number)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_first_name ON users (first_name)")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_last_name ON users (last_name)")
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::Schema(e.to_string()))?;

    info!("Users schema is in place");
    Ok(())
}

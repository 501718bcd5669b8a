//! User repository for database operations
//!
//! Methods return `sqlx::Error` rather than an opaque error so the routes
//! can tell a unique-constraint violation apart from everything else.

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{NewUser, UpdateUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a generated id and fresh timestamps
    ///
    /// The insert is atomic: a unique-constraint violation on email or
    /// phone number fails the whole statement with nothing left behind.
    pub async fn create(&self, new_user: &NewUser) -> Result<User, sqlx::Error> {
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO users (user_id, first_name, last_name, email, ph_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING user_id, first_name, last_name, email, ph_number, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(new_user.ph_number)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(User {
            user_id: row.get("user_id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            email: row.get("email"),
            ph_number: row.get("ph_number"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// List users, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, first_name, last_name, email, ph_number, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|row| User {
                user_id: row.get("user_id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                ph_number: row.get("ph_number"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(users)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT user_id, first_name, last_name, email, ph_number, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(User {
                user_id: row.get("user_id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                ph_number: row.get("ph_number"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })),
            None => Ok(None),
        }
    }

    /// Merge the present fields of an update onto a user and persist it
    ///
    /// `updated_at` is refreshed on every call, including one with an empty
    /// payload. Returns `None` when no user exists under the id.
    pub async fn update(
        &self,
        user_id: Uuid,
        update: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let Some(mut user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        user.apply_update(update);
        user.touch_updated_at();

        let row = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, email = $3, ph_number = $4, updated_at = $5
            WHERE user_id = $6
            RETURNING user_id, first_name, last_name, email, ph_number, created_at, updated_at
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.ph_number)
        .bind(user.updated_at)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(User {
                user_id: row.get("user_id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                ph_number: row.get("ph_number"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })),
            None => Ok(None),
        }
    }

    /// Delete a user by ID
    pub async fn delete(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

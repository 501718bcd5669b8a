//! Hero repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::{Hero, NewHero, UpdateHero};

/// Hero repository
#[derive(Clone)]
pub struct HeroRepository {
    pool: PgPool,
}

impl HeroRepository {
    /// Create a new hero repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new hero with a database-assigned id
    pub async fn create(&self, new_hero: &NewHero) -> Result<Hero> {
        let row = sqlx::query(
            r#"
            INSERT INTO heroes (name, age, secret_name)
            VALUES ($1, $2, $3)
            RETURNING id, name, age, secret_name
            "#,
        )
        .bind(&new_hero.name)
        .bind(new_hero.age)
        .bind(&new_hero.secret_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(Hero {
            id: row.get("id"),
            name: row.get("name"),
            age: row.get("age"),
            secret_name: row.get("secret_name"),
        })
    }

    /// List heroes in id order
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, secret_name
            FROM heroes
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let heroes = rows
            .into_iter()
            .map(|row| Hero {
                id: row.get("id"),
                name: row.get("name"),
                age: row.get("age"),
                secret_name: row.get("secret_name"),
            })
            .collect();

        Ok(heroes)
    }

    /// Find a hero by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Hero>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, age, secret_name
            FROM heroes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(Hero {
                id: row.get("id"),
                name: row.get("name"),
                age: row.get("age"),
                secret_name: row.get("secret_name"),
            })),
            None => Ok(None),
        }
    }

    /// Merge the present fields of an update onto a hero and persist it
    ///
    /// Returns `None` when no hero exists under the id.
    pub async fn update(&self, id: i64, update: &UpdateHero) -> Result<Option<Hero>> {
        let Some(mut hero) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        hero.apply_update(update);

        sqlx::query(
            r#"
            UPDATE heroes
            SET name = $1, age = $2, secret_name = $3
            WHERE id = $4
            "#,
        )
        .bind(&hero.name)
        .bind(hero.age)
        .bind(&hero.secret_name)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(hero))
    }

    /// Delete a hero by ID
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

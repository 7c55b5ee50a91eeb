//! Database repository for shoe records.
//!
//! Every query here is keyed either by shoe id or by owner id; ownership
//! policy itself lives in `ShoeService`.

use crate::database::models::{CreateShoe, Shoe};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for shoe database operations.
pub struct ShoeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ShoeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists the shoes owned by `user_id`, most recently created first.
    pub async fn list_by_owner(&self, user_id: &str) -> Result<Vec<Shoe>> {
        let shoes = sqlx::query_as::<_, Shoe>(
            r#"
            SELECT id, name, brand, user_id, created_at
            FROM shoes
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(shoes)
    }

    /// Creates a new shoe.
    ///
    /// # Arguments
    /// * `shoe` - CreateShoe DTO; `user_id` must be the authenticated caller
    pub async fn create_shoe(&self, shoe: CreateShoe) -> Result<Shoe> {
        let id = Uuid::now_v7().to_string();
        let created_at = Utc::now();

        let shoe = sqlx::query_as::<_, Shoe>(
            r#"
            INSERT INTO shoes (id, name, brand, user_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, brand, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(shoe.name)
        .bind(shoe.brand)
        .bind(shoe.user_id)
        .bind(created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(shoe)
    }

    /// Retrieves a shoe by id regardless of owner.
    pub async fn get_shoe_by_id(&self, id: &str) -> Result<Option<Shoe>> {
        let shoe = sqlx::query_as::<_, Shoe>(
            "SELECT id, name, brand, user_id, created_at FROM shoes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(shoe)
    }

    /// Deletes a shoe by id.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if it was already gone
    pub async fn delete_shoe(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM shoes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

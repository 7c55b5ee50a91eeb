//! Shoe business logic service.
//!
//! Enforces per-record ownership on top of `ShoeRepository`. The owner id is
//! always the verified caller handed in by the handler.

use crate::database::models::{CreateNewShoe, CreateShoe, Shoe};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::shoe_repository::ShoeRepository;
use sqlx::SqlitePool;

pub const NOT_OWNER_MESSAGE: &str = "Not authorized to delete this shoe";

/// Service layer for shoe operations.
pub struct ShoeService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ShoeService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists the caller's shoes, newest first.
    pub async fn list_shoes(&self, user_id: &str) -> ServiceResult<Vec<Shoe>> {
        let repo = ShoeRepository::new(self.pool);
        Ok(repo.list_by_owner(user_id).await?)
    }

    /// Creates a shoe owned by `user_id`.
    ///
    /// # Arguments
    /// * `new_shoe` - Validated request body (name and brand)
    /// * `user_id` - Verified caller id from the access gate
    pub async fn create_shoe(&self, new_shoe: CreateNewShoe, user_id: &str) -> ServiceResult<Shoe> {
        let repo = ShoeRepository::new(self.pool);

        let shoe = repo
            .create_shoe(CreateShoe {
                name: new_shoe.name,
                brand: new_shoe.brand,
                user_id: user_id.to_owned(),
            })
            .await?;

        tracing::info!(shoe_id = %shoe.id, user_id = %user_id, "Created shoe");
        Ok(shoe)
    }

    /// Deletes a shoe owned by `user_id`.
    ///
    /// Existence is checked before ownership, so a missing shoe is always
    /// `NotFound` and someone else's shoe is always `PermissionDenied`.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` if the shoe does not exist (or was deleted
    ///   concurrently)
    /// - `ServiceError::PermissionDenied` if the caller is not the owner
    pub async fn delete_shoe(&self, shoe_id: &str, user_id: &str) -> ServiceResult<()> {
        let repo = ShoeRepository::new(self.pool);

        let shoe = repo
            .get_shoe_by_id(shoe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shoe", shoe_id))?;

        if shoe.user_id != user_id {
            tracing::warn!(shoe_id = %shoe_id, user_id = %user_id, "Rejected delete by non-owner");
            return Err(ServiceError::permission_denied(NOT_OWNER_MESSAGE));
        }

        if !repo.delete_shoe(shoe_id).await? {
            return Err(ServiceError::not_found("Shoe", shoe_id));
        }

        tracing::info!(shoe_id = %shoe_id, user_id = %user_id, "Deleted shoe");
        Ok(())
    }
}

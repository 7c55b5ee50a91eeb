//! Database repository for user management operations.
//!
//! Provides the credential store: creating users and looking them up by
//! email. Users are never updated or deleted.

use crate::database::models::{CreateUser, User};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `user` - CreateUser DTO containing the email and password hash
    ///
    /// # Returns
    /// The newly created User with all fields populated. Fails with the
    /// underlying `sqlx::Error` if the email is already taken.
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let id = Uuid::now_v7().to_string();
        let created_at = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(created_at)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email (exact, case-sensitive match).
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Checks if an email already exists in the system.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count > 0)
    }
}

/// Returns true when `error` wraps a UNIQUE constraint violation.
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    match error.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_error)) => db_error.is_unique_violation(),
        _ => false,
    }
}

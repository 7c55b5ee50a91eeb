//! User business logic service.
//!
//! Handles user creation and credential checks. Plaintext passwords only
//! exist inside this module and are never stored or logged.

use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::{UserRepository, is_unique_violation};
use bcrypt::{hash, verify};
use sqlx::SqlitePool;

/// Shared by the unknown-email and wrong-password cases so the two are
/// indistinguishable to the caller.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub const EMAIL_TAKEN_MESSAGE: &str = "User with this email already exists";

/// bcrypt hashing with a configured cost, run on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password before storing it in the database
    pub async fn hash_password(&self, password: &str) -> ServiceResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Hashing task failed: {}", e)))?
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against the stored hash
    ///
    /// # Returns
    /// `true` if password matches hash, `false` otherwise
    pub async fn verify_password(&self, password: &str, password_hash: &str) -> ServiceResult<bool> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();

        tokio::task::spawn_blocking(move || verify(password, &password_hash))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Verification task failed: {}", e)))?
            .map_err(|e| {
                ServiceError::internal_error(format!("Password verification failed: {}", e))
            })
    }
}

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    /// * `hasher` - Password hashing policy
    pub fn new(pool: &'a SqlitePool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }

    /// Creates a new user with a freshly hashed password.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` if the email is taken, whether
    /// that is noticed up front or by the store's uniqueness constraint.
    pub async fn create_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.email_exists(email).await? {
            return Err(ServiceError::already_exists(EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = self.hasher.hash_password(password).await?;

        let data = CreateUser {
            email: email.to_owned(),
            password_hash,
        };

        match repo.create_user(data).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Registered new user");
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => {
                Err(ServiceError::already_exists(EMAIL_TAKEN_MESSAGE))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Checks an email/password pair.
    ///
    /// # Errors
    /// Returns the same `ServiceError::Unauthorized` for an unknown email and
    /// for a wrong password.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        let Some(user) = repo.get_user_by_email(email).await? else {
            // Same bcrypt work as a real check, so an unknown email is not faster.
            self.hasher.hash_password(password).await.ok();
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        if !self
            .hasher
            .verify_password(password, &user.password_hash)
            .await?
        {
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        Ok(user)
    }
}

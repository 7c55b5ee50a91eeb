//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. The API-facing views live next to the handlers that
//! return them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered user. Never serialized directly: see [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert DTO for a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// The only user representation that ever leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// A shoe owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a shoe. The owner is never taken from here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNewShoe {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name and brand are required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Name and brand are required"))]
    pub brand: String,
}

/// Insert DTO for a shoe. `user_id` always comes from the verified caller.
#[derive(Debug, Clone)]
pub struct CreateShoe {
    pub name: String,
    pub brand: String,
    pub user_id: String,
}

//! Data structures for authentication-related entities.
//!
//! This module defines request and response payloads for registration and
//! login, and the `AuthUser` identity produced by the access gate.

use crate::database::models::PublicUser;
use crate::utils::jwt::Claims;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email and password are required"),
        contains(pattern = "@", message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Response to a successful registration or login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
    /// Token expiration in seconds
    pub expires_in: u64,
}

/// Identity of the caller on a protected route.
///
/// Inserted into request extensions by `jwt_auth` once the bearer token has
/// been verified; handlers pass `id` explicitly into service calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

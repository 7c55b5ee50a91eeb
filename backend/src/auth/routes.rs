//! Defines the HTTP routes specifically for authentication.
//!
//! These routes are public; everything they return is scoped to the
//! credentials in the request body.

use crate::auth::handlers::*;
use axum::{Router, routing::post};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

//! Defines the HTTP routes for shoe management.
//!
//! Every route here sits behind the JWT access gate.

use super::handlers::{create_shoe, delete_shoe, list_shoes};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{delete, get},
};

pub fn shoe_router() -> Router {
    Router::new()
        .route("/", get(list_shoes).post(create_shoe))
        .route("/{id}", delete(delete_shoe))
        .route_layer(middleware::from_fn(jwt_auth))
}

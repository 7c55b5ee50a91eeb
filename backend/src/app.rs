//! Assembles the Axum application: routes, shared extensions and HTTP layers.

use crate::api;
use crate::auth;
use crate::config::Config;
use crate::services::user_service::PasswordHasher;
use crate::utils::jwt::JwtUtils;
use anyhow::{Context, Result};
use axum::{
    Extension, Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the full application router.
///
/// The pool, token utilities and password hasher are shared with every
/// handler through `Extension`; nothing else is held across requests.
pub fn build_router(pool: SqlitePool, config: &Config) -> Result<Router> {
    let jwt_utils = JwtUtils::from_config(config);
    let hasher = PasswordHasher::new(config.bcrypt_cost);

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS_ORIGIN: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .route("/health", get(api::health::health))
        .nest("/auth", auth::routes::auth_router())
        .nest("/shoes", api::shoe::routes::shoe_router())
        .fallback(api::health::not_found)
        .layer(Extension(pool))
        .layer(Extension(jwt_utils))
        .layer(Extension(hasher))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

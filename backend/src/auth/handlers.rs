//! Handler functions for authentication-related API endpoints.
//!
//! These functions receive already-validated request bodies and delegate to
//! `auth::service` for the core business logic.

use crate::api::common::{ApiError, ApiResponse, ValidatedJson, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::services::user_service::PasswordHasher;
use crate::utils::jwt::JwtUtils;
use axum::{extract::Extension, http::StatusCode, response::Json};
use sqlx::SqlitePool;

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(hasher): Extension<PasswordHasher>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.register(payload).await {
        Ok(response) => Ok((StatusCode::CREATED, Json(ApiResponse::success(response)))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<JwtUtils>,
    Extension(hasher): Extension<PasswordHasher>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let auth_service = AuthService::new(&pool, &jwt_utils, hasher);

    match auth_service.login(payload).await {
        Ok(response) => Ok(Json(ApiResponse::success(response))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

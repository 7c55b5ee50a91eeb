//! Handler functions for shoe API endpoints.
//!
//! Every handler runs behind `jwt_auth` and receives the caller as an
//! `AuthUser`; the owner id passed to `ShoeService` always comes from there.

use crate::api::common::{ApiError, ApiResponse, ValidatedJson, service_error_to_http};
use crate::auth::models::AuthUser;
use crate::database::models::{CreateNewShoe, Shoe};
use crate::services::shoe_service::ShoeService;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

/// List the caller's shoes, newest first
#[axum::debug_handler]
pub async fn list_shoes(
    Extension(pool): Extension<SqlitePool>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<Shoe>>>, ApiError> {
    let service = ShoeService::new(&pool);

    match service.list_shoes(&auth_user.id).await {
        Ok(shoes) => Ok(Json(ApiResponse::success(shoes))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Create a shoe owned by the caller
#[axum::debug_handler]
pub async fn create_shoe(
    Extension(pool): Extension<SqlitePool>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<CreateNewShoe>,
) -> Result<(StatusCode, Json<ApiResponse<Shoe>>), ApiError> {
    let service = ShoeService::new(&pool);

    match service.create_shoe(payload, &auth_user.id).await {
        Ok(shoe) => Ok((StatusCode::CREATED, Json(ApiResponse::success(shoe)))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Delete one of the caller's shoes
#[axum::debug_handler]
pub async fn delete_shoe(
    Extension(pool): Extension<SqlitePool>,
    Extension(auth_user): Extension<AuthUser>,
    Path(shoe_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let service = ShoeService::new(&pool);

    match service.delete_shoe(&shoe_id, &auth_user.id).await {
        Ok(()) => Ok(Json(ApiResponse::message("Shoe deleted successfully"))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

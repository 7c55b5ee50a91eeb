//! Response envelope and error translation for API handlers.
//!
//! Provides the standard JSON envelope and the conversion from service-layer
//! errors into HTTP responses. Includes:
//! - `ApiResponse`, the `{status, data | message}` envelope
//! - `ServiceError` to HTTP status code mapping
//! - Validation error formatting helpers
//! - `ValidatedJson`, a body extractor that validates at the request boundary
//!
//! # Error Handling Flow
//! 1. Malformed bodies are rejected by `ValidatedJson` before any service runs
//! 2. Service layer returns domain-specific `ServiceError`
//! 3. `service_error_to_http` converts it to a status code and error envelope
//! 4. Unexpected failures are logged and reported as a generic 500

use crate::errors::ServiceError;
use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use validator::Validate;

/// Error half of every handler result: a status code plus an error envelope.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Outcome marker carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `success` or `error`
    pub status: ResponseStatus,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-specific validation error details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response that only carries a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: None,
            message: Some(message.into()),
            details: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, details: Option<Vec<FieldError>>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.into()),
            details,
        }
    }
}

/// Build an error response with the given status and message
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::error(message, None)))
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound { entity, identifier } => {
            tracing::debug!("{} '{}' not found", entity, identifier);
            (StatusCode::NOT_FOUND, format!("{} not found", entity))
        }
        ServiceError::AlreadyExists { message } => (StatusCode::CONFLICT, message),
        ServiceError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
        ServiceError::PermissionDenied { message } => (StatusCode::FORBIDDEN, message),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {:#}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    error_response(status, message)
}

/// Formats validator::ValidationErrors into field-specific error details
pub fn validation_errors_to_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Helper to create validation error response
pub fn validation_error_response(errors: validator::ValidationErrors) -> ApiError {
    let field_errors = validation_errors_to_field_errors(&errors);
    let message = field_errors
        .first()
        .map(|error| error.message.clone())
        .unwrap_or_else(|| "Validation failed".to_string());

    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(message, Some(field_errors))),
    )
}

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Both undecodable bodies and rule violations are reported as 400 with the
/// standard error envelope.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_http)?;

        value.validate().map_err(validation_error_response)?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_to_http(rejection: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected a JSON request body",
        JsonRejection::JsonDataError(_) => "Request body has missing or invalid fields",
        _ => "Malformed JSON request body",
    };
    service_error_to_http(ServiceError::validation(message))
}

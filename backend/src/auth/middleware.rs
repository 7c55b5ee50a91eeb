//! Middleware for protecting authenticated routes.
//!
//! `jwt_auth` is the access gate: it verifies the bearer token before any
//! handler logic runs and hands the caller identity on as an `AuthUser`.

use crate::api::common::{ApiError, error_response, service_error_to_http};
use crate::auth::models::AuthUser;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

pub const MISSING_TOKEN_MESSAGE: &str = "No token provided";

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<JwtUtils>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = authenticate(&jwt_utils, request.headers())?;

    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Resolves the caller identity from the `Authorization` header.
pub fn authenticate(jwt_utils: &JwtUtils, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let token = bearer_token(headers)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, MISSING_TOKEN_MESSAGE))?;

    jwt_utils
        .validate_token(token)
        .map(AuthUser::from)
        .map_err(service_error_to_http)
}

/// Extracts `<token>` from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::INVALID_TOKEN_MESSAGE;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("bearer abc")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_authenticate_distinguishes_missing_from_invalid() {
        let jwt = JwtUtils::new("gate-secret", 60);

        let (status, body) = authenticate(&jwt, &HeaderMap::new()).unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message.as_deref(), Some(MISSING_TOKEN_MESSAGE));

        let (status, body) = authenticate(&jwt, &headers("Bearer garbage")).unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message.as_deref(), Some(INVALID_TOKEN_MESSAGE));
    }

    #[test]
    fn test_authenticate_returns_identity() {
        let jwt = JwtUtils::new("gate-secret", 60);
        let token = jwt.generate_token("user-7", "bob@example.com").unwrap();

        let user = authenticate(&jwt, &headers(&format!("Bearer {token}"))).unwrap();
        assert_eq!(
            user,
            AuthUser {
                id: "user-7".to_string(),
                email: "bob@example.com".to_string(),
            }
        );
    }
}

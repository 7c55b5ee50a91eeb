//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::database::models::User;
use crate::errors::ServiceResult;
use crate::services::user_service::{PasswordHasher, UserService};
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;

/// Authentication service for registration, login and token issuance
pub struct AuthService<'a> {
    jwt_utils: &'a JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils, hasher: PasswordHasher) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool, hasher),
        }
    }

    /// Register a new user and sign them in
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .user_service
            .create_user(&request.email, &request.password)
            .await?;

        self.issue(user)
    }

    /// Authenticate user and generate a JWT token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .user_service
            .authenticate_user(&request.email, &request.password)
            .await?;

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue(user)
    }

    fn issue(&self, user: User) -> ServiceResult<AuthResponse> {
        let token = self.jwt_utils.generate_token(&user.id, &user.email)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
            expires_in: self.jwt_utils.expires_in_seconds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::errors::ServiceError;

    fn register(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login_yield_same_subject() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("auth-service-secret", 3600);
        let service = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        let registered = service
            .register(register("alice@example.com", "secret1"))
            .await
            .unwrap();
        let logged_in = service
            .login(login("alice@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(registered.user, logged_in.user);
        assert_eq!(registered.user.email, "alice@example.com");
        assert_eq!(registered.expires_in, 3600);

        let first = jwt.validate_token(&registered.token).unwrap();
        let second = jwt.validate_token(&logged_in.token).unwrap();
        assert_eq!(first.sub, registered.user.id);
        assert_eq!(first.sub, second.sub);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let pool = test_pool().await;
        let jwt = JwtUtils::new("auth-service-secret", 3600);
        let service = AuthService::new(&pool, &jwt, PasswordHasher::new(4));

        service
            .register(register("alice@example.com", "secret1"))
            .await
            .unwrap();
        let err = service
            .register(register("alice@example.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyExists { .. }));
    }
}

//! HTTP client for the Shoerack API.

use super::session::Session;
use crate::api::common::ApiResponse;
use crate::auth::models::AuthResponse;
use crate::database::models::{PublicUser, Shoe};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the session; it has already been invalidated.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Thin wrapper around `reqwest::Client` bound to one server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Registers a new account and establishes `session` with the issued token.
    pub async fn register(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> ClientResult<PublicUser> {
        let request = self
            .http
            .post(self.url("/auth/register"))
            .json(&json!({ "email": email, "password": password }));

        let auth: AuthResponse = self.send(session, request, "Registration failed").await?;
        session.establish(auth.token, auth.user.clone());
        Ok(auth.user)
    }

    /// Logs in and establishes `session` with the issued token.
    pub async fn login(
        &self,
        session: &mut Session,
        email: &str,
        password: &str,
    ) -> ClientResult<PublicUser> {
        let request = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }));

        let auth: AuthResponse = self.send(session, request, "Login failed").await?;
        session.establish(auth.token, auth.user.clone());
        Ok(auth.user)
    }

    pub async fn list_shoes(&self, session: &mut Session) -> ClientResult<Vec<Shoe>> {
        let request = self.http.get(self.url("/shoes"));
        self.send(session, request, "Failed to fetch shoes").await
    }

    pub async fn create_shoe(
        &self,
        session: &mut Session,
        name: &str,
        brand: &str,
    ) -> ClientResult<Shoe> {
        let request = self
            .http
            .post(self.url("/shoes"))
            .json(&json!({ "name": name, "brand": brand }));

        self.send(session, request, "Failed to add shoe").await
    }

    pub async fn delete_shoe(&self, session: &mut Session, shoe_id: &str) -> ClientResult<()> {
        let request = self.http.delete(self.url(&format!("/shoes/{shoe_id}")));
        self.send_without_data(session, request, "Failed to delete shoe")
            .await
    }

    /// Sends `request` with the session's bearer token and unwraps `data`.
    async fn send<T: DeserializeOwned>(
        &self,
        session: &mut Session,
        request: RequestBuilder,
        fallback: &str,
    ) -> ClientResult<T> {
        let envelope: ApiResponse<T> = self.execute(session, request, fallback).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::UnexpectedResponse("missing data".to_string()))
    }

    async fn send_without_data(
        &self,
        session: &mut Session,
        request: RequestBuilder,
        fallback: &str,
    ) -> ClientResult<()> {
        let _: ApiResponse<serde_json::Value> = self.execute(session, request, fallback).await?;
        Ok(())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        session: &mut Session,
        mut request: RequestBuilder,
        fallback: &str,
    ) -> ClientResult<ApiResponse<T>> {
        if let Some(token) = session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<ApiResponse<T>>()
                .await
                .map_err(|e| ClientError::UnexpectedResponse(e.to_string()));
        }

        let message = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("Session rejected by server: {}", message);
            session.invalidate();
            return Err(ClientError::Unauthorized { message });
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server port, token signing secret and CORS origin.

use crate::utils::jwt::expiry_after;
use anyhow::{Context, Result};
use chrono::Utc;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub bcrypt_cost: u32,
    pub server_port: u16,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://shoerack.db".to_string());

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;
        let acquire_timeout_seconds = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECONDS", 3u64)?;

        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET not set")?;
        if jwt_secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        let jwt_expires_in_seconds = parse_or(&lookup, "JWT_EXPIRES_IN_SECONDS", 86_400u64)?;
        if expiry_after(Utc::now(), jwt_expires_in_seconds).is_none() {
            anyhow::bail!("JWT_EXPIRES_IN_SECONDS is too large: {jwt_expires_in_seconds}");
        }
        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        let server_port = parse_or(&lookup, "SERVER_PORT", 5000u16)?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            bcrypt_cost,
            server_port,
            cors_origin,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number")),
        None => Ok(default),
    }
}

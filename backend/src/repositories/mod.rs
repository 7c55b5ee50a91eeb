//! Data-access layer.
//!
//! Repositories own the SQL and return `anyhow::Result`; business rules
//! belong to the services that call them.

pub mod shoe_repository;
pub mod user_repository;

//! Module for the owner-scoped shoe endpoints.

pub mod handlers;
pub mod routes;

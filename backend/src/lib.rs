//! Shoerack backend: a small REST service where users register, log in and
//! manage a personal list of shoes.
//!
//! The binary in `main.rs` wires configuration, the SQLite pool and the
//! router together; `client` is a typed consumer of the same API.

pub mod api;
pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

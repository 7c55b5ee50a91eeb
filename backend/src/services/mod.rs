//! Module for core business logic services.
//!
//! Services sit between the HTTP handlers and the repositories and own the
//! rules: credential checks for users, ownership checks for shoes.

pub mod shoe_service;
pub mod user_service;

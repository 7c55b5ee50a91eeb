//! Central module for organizing the application's REST endpoints.
//!
//! Authentication routes live in `crate::auth`; this module holds the
//! owner-scoped resource endpoints, the health probe and the shared
//! envelope/error plumbing.

pub mod common;
pub mod health;
pub mod shoe;

//! Collection of general utility modules.

pub mod jwt;

//! CLI command implementations.

pub mod admin;
pub mod projects;

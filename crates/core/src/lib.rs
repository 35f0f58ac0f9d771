//! Projects Hub Core - Shared types library.
//!
//! This crate provides common types used across all Projects Hub components:
//! - `server` - Public project listing and the admin API
//! - `cli` - Command-line tools for managing the admin account and projects
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no file access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Emails, project ids, projects, the admin account and timestamps

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Admin setup and password login

pub mod auth;

pub use auth::{AdminAuthError, AdminAuthService};

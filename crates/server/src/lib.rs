//! Projects Hub server library.
//!
//! Serves the public project listing and the password-protected admin API.
//! Exposed as a library so the CLI and the integration tests share the same
//! stores and router.
//!
//! # Persistence
//!
//! Two JSON documents under the configured data directory: the single admin
//! record and the ordered project list. See [`store`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use app::build_router;
pub use config::HubConfig;
pub use state::AppState;

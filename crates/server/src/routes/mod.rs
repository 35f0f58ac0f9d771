//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Health check
//!
//! # Public
//! GET    /api/projects              - Project listing
//!
//! # Setup (until the admin exists)
//! GET    /api/admin/setup           - { setupRequired }
//! POST   /api/admin/setup           - Create admin and log in
//!
//! # Auth
//! POST   /api/admin/login           - Password login
//! POST   /api/admin/logout          - Logout
//! GET    /api/admin/me              - Current admin (auth)
//!
//! # Projects (auth)
//! POST   /api/admin/projects        - Add project
//! PUT    /api/admin/projects/{id}   - Update project
//! DELETE /api/admin/projects/{id}   - Delete project
//! ```

pub mod auth;
pub mod projects;
pub mod setup;

use axum::{Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by mutations with nothing else to report.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Build all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(projects::router())
        .merge(setup::router())
        .merge(auth::router())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

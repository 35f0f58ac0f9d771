//! HTTP middleware and extractors.
//!
//! - `session` - In-memory `tower-sessions` layer (server-side session ids)
//! - `auth` - `RequireAdmin` extractor and session helpers

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, clear_current_admin, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};

//! Session middleware configuration.
//!
//! Sessions live server-side in a `MemoryStore`; the cookie only carries the
//! session id, so every authenticated request is checked against the store.
//! Restarting the server logs the admin out.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::HubConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "hub_admin_session";

/// Session expiry after inactivity, in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &HubConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

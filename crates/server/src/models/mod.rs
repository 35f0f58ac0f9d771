//! Domain models for the server.

pub mod session;

pub use session::{CurrentAdmin, keys as session_keys};

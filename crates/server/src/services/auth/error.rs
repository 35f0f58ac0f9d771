//! Admin authentication error types.

use thiserror::Error;

use projects_hub_core::SetupInputError;

use crate::store::StoreError;

/// Errors that can occur during admin authentication operations.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Setup form failed validation.
    #[error("invalid setup: {0}")]
    InvalidSetup(#[from] SetupInputError),

    /// Setup attempted after the admin account was created.
    #[error("admin account already exists")]
    AlreadyExists,

    /// Wrong username or password, or no account yet.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Store error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AdminAuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => Self::AlreadyExists,
            other => Self::Store(other),
        }
    }
}

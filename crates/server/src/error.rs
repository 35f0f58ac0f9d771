//! Unified error handling for the HTTP layer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use projects_hub_core::ProjectInputError;

use crate::services::AdminAuthError;
use crate::store::StoreError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Admin authentication failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AdminAuthError),

    /// Project input failed validation.
    #[error("Invalid project: {0}")]
    InvalidProject(#[from] ProjectInputError),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Session layer failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::AlreadyExists) | Self::Auth(AdminAuthError::AlreadyExists) => {
                StatusCode::CONFLICT
            }
            Self::Auth(AdminAuthError::InvalidSetup(_)) | Self::InvalidProject(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Auth(AdminAuthError::InvalidCredentials) | Self::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Store(_) | Self::Auth(AdminAuthError::Store(_)) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::NotFound(_)) => "Project not found".to_owned(),
            Self::Store(StoreError::AlreadyExists) | Self::Auth(AdminAuthError::AlreadyExists) => {
                "Admin account already exists".to_owned()
            }
            Self::Auth(AdminAuthError::InvalidSetup(e)) => e.to_string(),
            Self::Auth(AdminAuthError::InvalidCredentials) => "Invalid credentials".to_owned(),
            Self::InvalidProject(e) => e.to_string(),
            Self::Unauthorized(msg) => msg.clone(),
            Self::Store(_) | Self::Auth(AdminAuthError::Store(_)) | Self::Session(_) => {
                "Internal server error".to_owned()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use projects_hub_core::{ProjectId, SetupInputError};

    use super::*;

    fn io_error() -> StoreError {
        StoreError::Io(std::io::Error::other("disk full"))
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(StoreError::NotFound(ProjectId::new("project-1")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AdminAuthError::AlreadyExists.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AdminAuthError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AdminAuthError::InvalidSetup(SetupInputError::PasswordTooShort).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ProjectInputError::Empty("name").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(io_error().into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AdminAuthError::Store(io_error()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::from(io_error());
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("disk full"));
    }
}

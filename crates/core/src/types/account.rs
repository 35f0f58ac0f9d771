//! The single administrator account.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::email::{Email, EmailError};
use super::timestamp::Millis;

/// Minimum username length accepted by setup.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length accepted by setup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The persisted administrator record.
///
/// At most one exists per deployment. It is written once by setup and never
/// updated afterwards.
///
/// Implements `Debug` manually to redact the password hash.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub username: String,
    /// Checked by setup before the record is written, never on load.
    pub email: String,
    /// `<32 hex salt>:<128 hex derived key>`
    pub password_hash: String,
    pub created_at: Millis,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Validation errors for [`SetupInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupInputError {
    #[error("username must be at least {MIN_USERNAME_LENGTH} characters")]
    UsernameTooShort,

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

/// Fields submitted by the first-time setup form.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
pub struct SetupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SetupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl SetupInput {
    /// Validate the form and return the parsed email.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`SetupInputError`].
    pub fn validate(&self) -> Result<Email, SetupInputError> {
        if self.username.trim().chars().count() < MIN_USERNAME_LENGTH {
            return Err(SetupInputError::UsernameTooShort);
        }
        let email = Email::parse(self.email.trim())?;
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SetupInputError::PasswordTooShort);
        }
        Ok(email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn setup(username: &str, email: &str, password: &str) -> SetupInput {
        SetupInput {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn test_setup_validation() {
        let email = setup("alice", "alice@example.com", "secret1").validate().unwrap();
        assert_eq!(email.as_str(), "alice@example.com");

        assert_eq!(
            setup("al", "alice@example.com", "secret1").validate(),
            Err(SetupInputError::UsernameTooShort)
        );
        assert!(matches!(
            setup("alice", "alice", "secret1").validate(),
            Err(SetupInputError::InvalidEmail(_))
        ));
        assert_eq!(
            setup("alice", "alice@example.com", "12345").validate(),
            Err(SetupInputError::PasswordTooShort)
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let account = AdminAccount {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password_hash: "abcd:ef01".to_owned(),
            created_at: 1,
        };
        let out = format!("{account:?}");
        assert!(out.contains("[REDACTED]"));
        assert!(!out.contains("abcd:ef01"));

        let out = format!("{:?}", setup("alice", "alice@example.com", "hunter22"));
        assert!(!out.contains("hunter22"));
    }

    #[test]
    fn test_account_json_layout() {
        let json = r#"{
            "username": "alice",
            "email": "alice@example.com",
            "passwordHash": "00:11",
            "createdAt": 1700000000000
        }"#;
        let account: AdminAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_stored_email_is_not_revalidated() {
        let json = r#"{
            "username": "alice",
            "email": "alice@intranet host",
            "passwordHash": "00:11",
            "createdAt": 1
        }"#;
        let account: AdminAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.email, "alice@intranet host");
    }
}

//! Admin account commands.
//!
//! # Usage
//!
//! ```bash
//! hub-cli admin status
//! HUB_ADMIN_PASSWORD='s3cret!' hub-cli admin create -u alice -e alice@example.com
//! hub-cli admin verify -u alice < password.txt
//! ```

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use projects_hub_core::SetupInput;
use projects_hub_server::models::CurrentAdmin;
use projects_hub_server::services::{AdminAuthError, AdminAuthService};
use projects_hub_server::store::CredentialStore;

/// Environment variable consulted before stdin for the password.
const PASSWORD_ENV: &str = "HUB_ADMIN_PASSWORD";

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// No password supplied.
    #[error("no password given: set {PASSWORD_ENV} or pipe it on stdin")]
    MissingPassword,

    /// Reading stdin failed.
    #[error("failed to read password: {0}")]
    Io(#[from] std::io::Error),

    /// Setup or login failed.
    #[error(transparent)]
    Auth(#[from] AdminAuthError),
}

/// Read the password from `HUB_ADMIN_PASSWORD`, else the first stdin line.
pub async fn read_password() -> Result<SecretString, AdminError> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(password));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let line = lines.next_line().await?.ok_or(AdminError::MissingPassword)?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(AdminError::MissingPassword);
    }
    Ok(SecretString::from(password))
}

/// Log whether the admin account exists.
pub async fn status(data_dir: &Path) {
    let store = CredentialStore::new(data_dir);

    if !store.account_exists().await {
        tracing::info!("No admin account. Run 'hub-cli admin create' or open the setup page.");
        return;
    }

    match store.get_account().await {
        Some(account) => tracing::info!(
            username = %account.username,
            email = %account.email,
            created_at = account.created_at,
            "Admin account exists"
        ),
        None => tracing::warn!(
            path = %store.path().display(),
            "Admin record exists but cannot be read"
        ),
    }
}

/// Create the admin account.
///
/// Applies the same validation as the setup page.
pub async fn create(
    data_dir: &Path,
    username: &str,
    email: &str,
    password: SecretString,
) -> Result<CurrentAdmin, AdminError> {
    let store = CredentialStore::new(data_dir);
    let input = SetupInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.expose_secret().to_owned(),
    };

    let admin = AdminAuthService::new(&store).setup(input).await?;
    tracing::info!(
        username = %admin.username,
        email = %admin.email,
        "Admin account created successfully"
    );
    Ok(admin)
}

/// Check a username/password pair.
pub async fn verify(
    data_dir: &Path,
    username: &str,
    password: &SecretString,
) -> Result<(), AdminError> {
    let store = CredentialStore::new(data_dir);
    AdminAuthService::new(&store).login(username, password).await?;
    tracing::info!(username = %username, "Credentials are valid");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_verify() {
        let dir = tempfile::tempdir().unwrap();

        let admin = create(
            dir.path(),
            "alice",
            "alice@example.com",
            SecretString::from("correct"),
        )
        .await
        .unwrap();
        assert_eq!(admin.username, "alice");

        verify(dir.path(), "alice", &SecretString::from("correct"))
            .await
            .unwrap();
        assert!(matches!(
            verify(dir.path(), "alice", &SecretString::from("wrong")).await,
            Err(AdminError::Auth(AdminAuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_create_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        create(dir.path(), "alice", "alice@example.com", SecretString::from("correct"))
            .await
            .unwrap();

        let second = create(
            dir.path(),
            "bob",
            "bob@example.com",
            SecretString::from("correct"),
        )
        .await;
        assert!(matches!(
            second,
            Err(AdminError::Auth(AdminAuthError::AlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_create_validates_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = create(
            dir.path(),
            "alice",
            "not-an-email",
            SecretString::from("correct"),
        )
        .await;
        assert!(matches!(
            result,
            Err(AdminError::Auth(AdminAuthError::InvalidSetup(_)))
        ));
    }
}

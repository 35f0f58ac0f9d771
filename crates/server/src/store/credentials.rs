//! Credential store for the single admin account.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use projects_hub_core::{AdminAccount, Email, now_millis};

use super::password::{hash_password, verify_password};
use super::{Loaded, StoreError, read_json, write_json};

/// File name of the admin record inside the data directory.
pub const ADMIN_FILE: &str = "admin.json";

/// Persists and verifies the administrator identity.
///
/// The record is written once by [`create_account`](Self::create_account)
/// and never modified afterwards.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    create_lock: Mutex<()>,
}

impl CredentialStore {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(ADMIN_FILE),
            create_lock: Mutex::new(()),
        }
    }

    /// Path of the admin record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an admin record is present on disk.
    ///
    /// A present but unreadable record still counts, so setup can never
    /// overwrite it.
    pub async fn account_exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Create the admin account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if an account is present.
    /// Returns `StoreError::Io` or `StoreError::Serialize` if the write fails.
    pub async fn create_account(
        &self,
        username: &str,
        email: Email,
        password: &SecretString,
    ) -> Result<AdminAccount, StoreError> {
        let _guard = self.create_lock.lock().await;

        if self.account_exists().await {
            return Err(StoreError::AlreadyExists);
        }

        let password = password.clone();
        let password_hash =
            tokio::task::spawn_blocking(move || hash_password(password.expose_secret())).await?;

        let account = AdminAccount {
            username: username.to_owned(),
            email: email.into_inner(),
            password_hash,
            created_at: now_millis(),
        };

        write_json(&self.path, &account).await?;

        tracing::info!(username = %account.username, "Admin account created");
        Ok(account)
    }

    /// Load the admin account.
    ///
    /// Returns `None` if no account exists or the record cannot be parsed.
    pub async fn get_account(&self) -> Option<AdminAccount> {
        match read_json(&self.path).await {
            Loaded::Found(account) => Some(account),
            Loaded::Missing => None,
            Loaded::Corrupt(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Admin record is unreadable, treating as absent"
                );
                None
            }
        }
    }

    /// Check a username/password pair against the stored account.
    ///
    /// The username comparison is exact and case-sensitive.
    pub async fn verify_credentials(&self, username: &str, password: &SecretString) -> bool {
        let Some(account) = self.get_account().await else {
            return false;
        };
        if account.username != username {
            return false;
        }

        let password = password.clone();
        let hash = account.password_hash;
        match tokio::task::spawn_blocking(move || verify_password(password.expose_secret(), &hash))
            .await
        {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

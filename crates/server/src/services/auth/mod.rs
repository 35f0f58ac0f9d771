//! Admin authentication service.
//!
//! Password-based login for the single admin account, plus the one-time
//! setup flow that creates it.

mod error;

pub use error::AdminAuthError;

use secrecy::SecretString;

use projects_hub_core::SetupInput;

use crate::models::CurrentAdmin;
use crate::store::CredentialStore;

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    /// Whether the setup flow still has to run.
    pub async fn setup_required(&self) -> bool {
        !self.credentials.account_exists().await
    }

    /// Create the admin account from the setup form.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidSetup` if the form fails validation.
    /// Returns `AdminAuthError::AlreadyExists` if setup already ran.
    /// Returns `AdminAuthError::Store` if the record cannot be written.
    pub async fn setup(&self, input: SetupInput) -> Result<CurrentAdmin, AdminAuthError> {
        let email = input.validate()?;

        if self.credentials.account_exists().await {
            return Err(AdminAuthError::AlreadyExists);
        }

        let password = SecretString::from(input.password);
        let account = self
            .credentials
            .create_account(&input.username, email, &password)
            .await?;

        Ok(CurrentAdmin::from(&account))
    }

    /// Check credentials and return the identity to store in the session.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidCredentials` if the username or
    /// password is wrong, or no account exists.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<CurrentAdmin, AdminAuthError> {
        if !self.credentials.verify_credentials(username, password).await {
            tracing::warn!(username = %username, "Failed admin login");
            return Err(AdminAuthError::InvalidCredentials);
        }

        // Re-read for the email; a concurrent wipe between the two reads
        // surfaces as a failed login.
        let account = self
            .credentials
            .get_account()
            .await
            .ok_or(AdminAuthError::InvalidCredentials)?;

        tracing::info!(username = %account.username, "Admin logged in");
        Ok(CurrentAdmin::from(&account))
    }
}

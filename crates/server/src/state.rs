//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::HubConfig;
use crate::store::{CredentialStore, ProjectStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Both stores are rooted at
/// `config.data_dir`; nothing reads the data location from globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: HubConfig,
    credentials: CredentialStore,
    projects: ProjectStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: HubConfig) -> Self {
        let credentials = CredentialStore::new(&config.data_dir);
        let projects = ProjectStore::new(&config.data_dir);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                credentials,
                projects,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    /// Get a reference to the admin credential store.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        &self.inner.credentials
    }

    /// Get a reference to the project store.
    #[must_use]
    pub fn projects(&self) -> &ProjectStore {
        &self.inner.projects
    }
}

//! Published projects and the document they are persisted in.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::id::ProjectId;
use super::timestamp::Millis;

/// Validation errors for [`ProjectInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectInputError {
    /// A required text field is empty.
    #[error("{0} is required")]
    Empty(&'static str),

    /// The link is not an absolute http(s) URL.
    #[error("valid URL is required: {0}")]
    InvalidLink(String),
}

/// A project shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Icon name or inline SVG.
    pub icon: String,
    pub link: String,
    pub created_at: Millis,
    pub updated_at: Millis,
}

impl Project {
    /// Build a new project from validated input.
    ///
    /// `created_at` and `updated_at` both start at `now`.
    #[must_use]
    pub fn new(id: ProjectId, input: ProjectInput, now: Millis) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            icon: input.icon,
            link: input.link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh `updated_at`.
    ///
    /// `id` and `created_at` never change. `updated_at` is clamped so it
    /// cannot fall behind `created_at` if the clock stepped backwards.
    pub fn apply(&mut self, input: ProjectInput, now: Millis) {
        self.name = input.name;
        self.description = input.description;
        self.icon = input.icon;
        self.link = input.link;
        self.updated_at = now.max(self.created_at);
    }
}

/// The caller-editable fields of a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub link: String,
}

impl ProjectInput {
    /// Check that every field is present and the link is a usable URL.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as a [`ProjectInputError`].
    pub fn validate(&self) -> Result<(), ProjectInputError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("icon", &self.icon),
            ("link", &self.link),
        ] {
            if value.trim().is_empty() {
                return Err(ProjectInputError::Empty(field));
            }
        }

        let url = Url::parse(self.link.trim())
            .map_err(|e| ProjectInputError::InvalidLink(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProjectInputError::InvalidLink(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}

/// On-disk envelope for the project collection.
///
/// Rewritten wholesale on every change. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub last_updated: Millis,
}

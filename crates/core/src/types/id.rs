//! Project identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every generated project id.
const PROJECT_ID_PREFIX: &str = "project-";

/// Identifier of a project in the collection.
///
/// Stored as a plain string so ids written by older deployments (or edited by
/// hand) keep loading. Newly generated ids look like `project-1718000000000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap an existing id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id from a millisecond timestamp that is not already taken.
    ///
    /// Two projects created within the same millisecond would otherwise share
    /// an id, so the numeric part is bumped until `is_taken` says no.
    #[must_use]
    pub fn generate(now_millis: i64, is_taken: impl Fn(&Self) -> bool) -> Self {
        let mut candidate = now_millis;
        loop {
            let id = Self(format!("{PROJECT_ID_PREFIX}{candidate}"));
            if !is_taken(&id) {
                return id;
            }
            candidate = candidate.saturating_add(1);
        }
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

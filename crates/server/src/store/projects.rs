//! Project store: ordered CRUD over `projects.json`.
//!
//! Every call re-reads the document; nothing is cached between calls.
//! Mutations hold an in-process write lock across load, mutate and save, so
//! concurrent requests in this process cannot lose each other's updates.
//! Separate processes writing the same file remain last-writer-wins.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use projects_hub_core::{Project, ProjectId, ProjectInput, ProjectsDocument, now_millis};

use super::{Loaded, StoreError, read_json, write_json};

/// File name of the project document inside the data directory.
pub const PROJECTS_FILE: &str = "projects.json";

/// Durable, ordered project collection.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProjectStore {
    /// Create a store rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(PROJECTS_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the project document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all projects in display order.
    ///
    /// A missing or unparsable document yields an empty list.
    pub async fn load_all(&self) -> Vec<Project> {
        match read_json::<ProjectsDocument>(&self.path).await {
            Loaded::Found(doc) => doc.projects,
            Loaded::Missing => Vec::new(),
            Loaded::Corrupt(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Project document is unreadable, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the stored collection, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Serialize` if the write fails.
    pub async fn save_all(&self, projects: &[Project]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(projects).await
    }

    /// Append a new project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Serialize` if the write fails.
    pub async fn add(&self, input: ProjectInput) -> Result<Project, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut projects = self.load_all().await;

        let now = now_millis();
        let id = ProjectId::generate(now, |candidate| {
            projects.iter().any(|p| &p.id == candidate)
        });
        let project = Project::new(id, input, now);
        projects.push(project.clone());

        self.write(&projects).await?;
        tracing::info!(project_id = %project.id, name = %project.name, "Project added");
        Ok(project)
    }

    /// Replace the editable fields of an existing project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no project has `id`; nothing is written.
    /// Returns `StoreError::Io` or `StoreError::Serialize` if the write fails.
    pub async fn update(&self, id: &ProjectId, input: ProjectInput) -> Result<Project, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut projects = self.load_all().await;

        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        project.apply(input, now_millis());
        let updated = project.clone();

        self.write(&projects).await?;
        tracing::info!(project_id = %updated.id, "Project updated");
        Ok(updated)
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no project has `id`; nothing is written.
    /// Returns `StoreError::Io` or `StoreError::Serialize` if the write fails.
    pub async fn remove(&self, id: &ProjectId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut projects = self.load_all().await;

        let before = projects.len();
        projects.retain(|p| &p.id != id);
        if projects.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }

        self.write(&projects).await?;
        tracing::info!(project_id = %id, "Project removed");
        Ok(())
    }

    async fn write(&self, projects: &[Project]) -> Result<(), StoreError> {
        let doc = ProjectsDocument {
            projects: projects.to_vec(),
            last_updated: now_millis(),
        };
        write_json(&self.path, &doc).await.inspect_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to save projects");
        })
    }
}

//! Project management commands.

use std::path::Path;

use thiserror::Error;

use projects_hub_core::{Project, ProjectId, ProjectInput, ProjectInputError};
use projects_hub_server::store::{ProjectStore, StoreError};

/// Errors that can occur during project commands.
#[derive(Debug, Error)]
pub enum ProjectCommandError {
    #[error("invalid project: {0}")]
    Invalid(#[from] ProjectInputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Log every project in display order.
pub async fn list(data_dir: &Path) {
    let projects = ProjectStore::new(data_dir).load_all().await;
    if projects.is_empty() {
        tracing::info!("No projects");
        return;
    }

    for project in &projects {
        tracing::info!(
            id = %project.id,
            name = %project.name,
            link = %project.link,
            updated_at = project.updated_at,
            "{}",
            project.description
        );
    }
}

/// Validate and append a project.
pub async fn add(data_dir: &Path, input: ProjectInput) -> Result<Project, ProjectCommandError> {
    input.validate()?;
    let project = ProjectStore::new(data_dir).add(input).await?;
    tracing::info!(id = %project.id, "Project added");
    Ok(project)
}

/// Validate and replace a project's fields.
pub async fn update(
    data_dir: &Path,
    id: &ProjectId,
    input: ProjectInput,
) -> Result<Project, ProjectCommandError> {
    input.validate()?;
    let project = ProjectStore::new(data_dir).update(id, input).await?;
    tracing::info!(id = %project.id, "Project updated");
    Ok(project)
}

/// Delete a project.
pub async fn remove(data_dir: &Path, id: &ProjectId) -> Result<(), ProjectCommandError> {
    ProjectStore::new(data_dir).remove(id).await?;
    tracing::info!(id = %id, "Project removed");
    Ok(())
}

//! Project listing (public) and project management (admin).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};

use projects_hub_core::{Project, ProjectId, ProjectInput};

use crate::error::AppError;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

use super::SuccessResponse;

/// Build the projects router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list))
        .route("/api/admin/projects", post(create))
        .route("/api/admin/projects/{id}", put(update).delete(remove))
}

/// List projects in display order.
///
/// GET /api/projects
async fn list(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects().load_all().await)
}

/// Add a project.
///
/// POST /api/admin/projects
async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<ProjectInput>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    input.validate()?;
    let project = state.projects().add(input).await?;

    tracing::debug!(admin = %admin.username, project_id = %project.id, "Project created via API");
    Ok((StatusCode::CREATED, Json(project)))
}

/// Replace a project's editable fields.
///
/// PUT /api/admin/projects/{id}
async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Project>, AppError> {
    input.validate()?;
    let project = state.projects().update(&ProjectId::from(id), input).await?;
    Ok(Json(project))
}

/// Delete a project.
///
/// DELETE /api/admin/projects/{id}
async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.projects().remove(&ProjectId::from(id)).await?;
    Ok(Json(SuccessResponse::ok()))
}

//! First-time admin setup.
//!
//! Available until the admin account exists; afterwards setup answers 409.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tower_sessions::Session;

use projects_hub_core::SetupInput;

use crate::error::AppError;
use crate::middleware::set_current_admin;
use crate::services::AdminAuthService;
use crate::state::AppState;

use super::SuccessResponse;

/// Build the setup router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/admin/setup", get(check_setup).post(setup))
}

/// Response for the setup check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupStatusResponse {
    pub setup_required: bool,
}

/// Report whether the admin account still has to be created.
///
/// GET /api/admin/setup
async fn check_setup(State(state): State<AppState>) -> Json<SetupStatusResponse> {
    let setup_required = AdminAuthService::new(state.credentials())
        .setup_required()
        .await;
    Json(SetupStatusResponse { setup_required })
}

/// Create the admin account and log it in.
///
/// POST /api/admin/setup
async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<SetupInput>,
) -> Result<Json<SuccessResponse>, AppError> {
    let admin = AdminAuthService::new(state.credentials())
        .setup(input)
        .await?;

    set_current_admin(&session, &admin).await?;

    tracing::info!(username = %admin.username, "Admin setup completed");
    Ok(Json(SuccessResponse::ok()))
}

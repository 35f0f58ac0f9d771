//! Admin login, logout and identity.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{RequireAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::AdminAuthService;
use crate::state::AppState;

use super::SuccessResponse;

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/logout", post(logout))
        .route("/api/admin/me", get(me))
}

/// Login form.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Verify credentials and start an admin session.
///
/// POST /api/admin/login
async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let password = SecretString::from(req.password);
    let admin = AdminAuthService::new(state.credentials())
        .login(&req.username, &password)
        .await?;

    set_current_admin(&session, &admin).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// End the admin session.
///
/// POST /api/admin/logout
async fn logout(session: Session) -> Result<Json<SuccessResponse>, AppError> {
    clear_current_admin(&session).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Return the logged-in admin.
///
/// GET /api/admin/me
async fn me(RequireAdmin(admin): RequireAdmin) -> Json<CurrentAdmin> {
    Json(admin)
}

//! Admin login/logout API handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_sessions::Session;

use rekhali_core::AdminUserId;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::AdminAuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUser,
}

/// The authenticated admin, as reported to the client.
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: AdminUserId,
    pub email: String,
}

/// Login with email and password; on success the session cookie carries the
/// identity for seven days.
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let admin = AdminAuthService::new(state.pool())
        .login(&request.email, &request.password)
        .await?;

    let current = CurrentAdmin {
        id: admin.id,
        email: admin.email.clone(),
    };
    set_current_admin(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!(admin_id = %admin.id, "admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        user: LoginUser {
            id: admin.id,
            email: admin.email.into_inner(),
        },
    }))
}

/// Logout and clear the session.
///
/// POST /api/auth/logout
pub async fn logout(session: Session) -> Result<Json<Value>> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    Ok(Json(json!({ "success": true })))
}

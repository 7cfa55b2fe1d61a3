//! Settings API handlers (admin only).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::db::SettingsRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::Setting;
use crate::state::AppState;

/// Read a setting by key.
///
/// GET /api/settings/{key}
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Setting>> {
    let setting = SettingsRepository::new(state.pool())
        .get(&key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("setting '{key}'")))?;
    Ok(Json(setting))
}

/// Upsert request body.
#[derive(Debug, Deserialize)]
pub struct UpsertRequest {
    pub key: String,
    pub value: String,
}

/// Insert or overwrite a setting by key.
///
/// PUT /api/settings
pub async fn upsert(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(request): Json<UpsertRequest>,
) -> Result<Json<Setting>> {
    if request.key.trim().is_empty() {
        return Err(AppError::Validation("key is required".to_string()));
    }

    let setting = SettingsRepository::new(state.pool())
        .upsert(&request.key, &request.value)
        .await?;

    tracing::info!(key = %setting.key, "setting updated");
    Ok(Json(setting))
}

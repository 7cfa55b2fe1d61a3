//! Image upload handler (admin only).
//!
//! Accepts a multipart form with a single file field, stores the bytes
//! under the configured uploads directory with a random name, and
//! returns the public URL the stored file is served from.

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// File extensions we accept for product images.
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Store an uploaded image.
///
/// POST /api/uploads
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation(format!("invalid multipart body: {err}")))?
    {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };

        let extension = sanitized_extension(&file_name)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::Validation(format!("failed to read upload: {err}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }

        let stored_name = format!("{}.{extension}", Uuid::new_v4());
        let uploads_dir = &state.config().uploads_dir;
        tokio::fs::create_dir_all(uploads_dir)
            .await
            .map_err(|err| AppError::Internal(format!("failed to create uploads dir: {err}")))?;
        tokio::fs::write(uploads_dir.join(&stored_name), &bytes)
            .await
            .map_err(|err| AppError::Internal(format!("failed to store upload: {err}")))?;

        tracing::info!(file = %stored_name, size = bytes.len(), "image uploaded");
        return Ok(Json(json!({ "url": format!("/uploads/{stored_name}") })));
    }

    Err(AppError::Validation("no file field in upload".to_string()))
}

/// Extract and validate the file extension from a client-supplied name.
///
/// The extension is the only part of the client name we keep, and only
/// when it matches a known image format.
fn sanitized_extension(file_name: &str) -> Result<String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(AppError::Validation(format!(
            "unsupported file type '{file_name}', expected one of: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_image_extensions() {
        assert_eq!(sanitized_extension("photo.jpg").unwrap(), "jpg");
        assert_eq!(sanitized_extension("photo.JPEG").unwrap(), "jpeg");
        assert_eq!(sanitized_extension("a.b.webp").unwrap(), "webp");
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(sanitized_extension("script.sh").is_err());
        assert!(sanitized_extension("noextension").is_err());
        assert!(sanitized_extension("trailing.").is_err());
    }
}

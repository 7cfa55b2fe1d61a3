//! Authentication extractors for admin routes.
//!
//! A session is valid iff the identity it references still exists: the
//! guard resolves the session-stored admin id against the database on every
//! guarded request, so deleting an admin row revokes their access.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::db::AdminUserRepository;
use crate::models::{CurrentAdmin, session_keys};
use crate::state::AppState;

/// Extractor that requires admin authentication.
///
/// If the caller is not logged in (or the admin row has been deleted),
/// returns 401 Unauthorized for `/api/*` requests and a redirect to the
/// login page for HTML requests.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when admin authentication is required but missing.
#[derive(Debug)]
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
        }
    }
}

/// Pick the rejection shape based on the request path.
fn reject(parts: &Parts) -> AdminAuthRejection {
    if parts.uri.path().starts_with("/api/") {
        AdminAuthRejection::Unauthorized
    } else {
        AdminAuthRejection::RedirectToLogin
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let admin: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| reject(parts))?;

        // Verify the admin row still exists
        let exists = AdminUserRepository::new(state.pool())
            .get_by_id(admin.id)
            .await
            .ok()
            .flatten()
            .is_some();

        if !exists {
            // The stored identity no longer resolves. Drop the session,
            // otherwise the login page would still see it as logged in and
            // bounce the visitor back here forever.
            let _ = session.flush().await;
            return Err(reject(parts));
        }

        Ok(Self(admin))
    }
}

/// Extractor that optionally gets the current admin.
///
/// Unlike `RequireAdminAuth`, this does not reject the request and does not
/// hit the database; it only reads the session.
pub struct OptionalAdminAuth(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(admin))
    }
}

/// Helper to set the current admin in the session after login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::http::Request;
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower_sessions::{MemoryStore, Session};

    use rekhali_core::{AdminUserId, Email};

    use super::*;
    use crate::config::ServerConfig;

    // The pool is lazy and points nowhere: lookups fail, so any
    // session-stored identity is unresolvable.
    fn test_state() -> AppState {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/rekhali_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            seed_admin: None,
            uploads_dir: PathBuf::from("uploads"),
            sentry_dsn: None,
            sentry_environment: None,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/rekhali_test")
            .unwrap();
        AppState::new(config, pool)
    }

    fn empty_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    async fn logged_in_session() -> Session {
        let session = empty_session();
        let admin = CurrentAdmin {
            id: AdminUserId::generate(),
            email: Email::parse("admin@rekhali.com").unwrap(),
        };
        session
            .insert(session_keys::CURRENT_ADMIN, &admin)
            .await
            .unwrap();
        session
    }

    fn parts_for(path: &str, session: &Session) -> Parts {
        let (mut parts, ()) = Request::builder().uri(path).body(()).unwrap().into_parts();
        parts.extensions.insert(session.clone());
        parts
    }

    #[tokio::test]
    async fn test_logged_out_api_request_gets_unauthorized() {
        let state = test_state();
        let session = empty_session();
        let mut parts = parts_for("/api/products", &session);

        let result = RequireAdminAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Unauthorized)));
    }

    #[tokio::test]
    async fn test_logged_out_html_request_redirects_to_login() {
        let state = test_state();
        let session = empty_session();
        let mut parts = parts_for("/admin/dashboard", &session);

        let result = RequireAdminAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::RedirectToLogin)));
    }

    #[tokio::test]
    async fn test_stale_session_is_cleared_on_rejection() {
        let state = test_state();
        let session = logged_in_session().await;

        let mut parts = parts_for("/admin/dashboard", &session);
        let result = RequireAdminAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::RedirectToLogin)));

        // The login page must now see a logged-out visitor; if the stale
        // identity survived, it would redirect back to the dashboard and
        // loop.
        let mut login_parts = parts_for("/admin/login", &session);
        let OptionalAdminAuth(after) =
            OptionalAdminAuth::from_request_parts(&mut login_parts, &state)
                .await
                .unwrap();
        assert!(after.is_none());
    }

    #[tokio::test]
    async fn test_stale_session_on_api_path_gets_unauthorized() {
        let state = test_state();
        let session = logged_in_session().await;
        let mut parts = parts_for("/api/products", &session);

        let result = RequireAdminAuth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AdminAuthRejection::Unauthorized)));
    }

    #[tokio::test]
    async fn test_optional_auth_reads_session_without_database() {
        let state = test_state();
        let session = logged_in_session().await;
        let mut parts = parts_for("/admin/login", &session);

        let OptionalAdminAuth(admin) = OptionalAdminAuth::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert!(admin.is_some());
    }
}

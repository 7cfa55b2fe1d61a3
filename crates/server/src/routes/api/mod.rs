//! JSON API routes.
//!
//! Reads are public; every mutation requires an authenticated admin
//! session (enforced per-handler via `RequireAdminAuth`).

pub mod auth;
pub mod products;
pub mod settings;
pub mod uploads;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Maximum accepted upload size (10 MiB).
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/products",
            get(products::list)
                .post(products::create)
                .put(products::update)
                .delete(products::destroy),
        )
        .route("/api/products/{id}", get(products::show))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/settings", put(settings::upsert))
        .route("/api/settings/{key}", get(settings::show))
        .route(
            "/api/uploads",
            post(uploads::create).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}

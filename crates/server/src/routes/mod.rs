//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero + featured products)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Storefront
//! GET  /products               - Product listing
//! GET  /products/{slug}        - Product detail (WhatsApp order link)
//! GET  /about                  - About page
//!
//! # Admin panel
//! GET  /admin/login            - Login page
//! GET  /admin/dashboard        - Dashboard (requires auth)
//!
//! # JSON API
//! GET    /api/products         - List products (public)
//! GET    /api/products/{id}    - Single product (public)
//! POST   /api/products         - Create product (auth)
//! PUT    /api/products         - Update product, body carries id (auth)
//! DELETE /api/products?id=...  - Delete product (auth)
//! POST   /api/auth/login       - Login, sets 7-day session cookie
//! POST   /api/auth/logout      - Logout, clears session
//! GET    /api/settings/{key}   - Read a setting (auth)
//! PUT    /api/settings         - Upsert a setting (auth)
//! POST   /api/uploads          - Upload a product image (auth)
//! ```

pub mod admin;
pub mod api;
pub mod home;
pub mod pages;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the full application router (pages + API).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/products", get(products::index))
        .route("/products/{slug}", get(products::show))
        .route("/about", get(pages::about))
        .route("/admin/login", get(admin::login_page))
        .route("/admin/dashboard", get(admin::dashboard))
        .merge(api::routes())
}

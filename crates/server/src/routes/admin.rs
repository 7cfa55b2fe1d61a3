//! Admin panel pages.
//!
//! Pages only; mutations go through the JSON API under `/api`.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};

use crate::db::{ProductRepository, SettingsRepository, settings::WHATSAPP_NUMBER_KEY};
use crate::db::settings::DEFAULT_WHATSAPP_NUMBER;
use crate::error::Result;
use crate::middleware::{OptionalAdminAuth, RequireAdminAuth};
use crate::models::Product;
use crate::routes::products::format_rupees;
use crate::state::AppState;

/// Product row data for the dashboard table.
pub struct AdminProductView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: String,
    pub in_stock: bool,
    pub featured: bool,
    pub updated_at: String,
}

impl From<&Product> for AdminProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            slug: p.slug.to_string(),
            price: format_rupees(p.price),
            in_stock: p.in_stock,
            featured: p.featured,
            updated_at: p.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginPageTemplate;

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub products: Vec<AdminProductView>,
    pub whatsapp_number: String,
}

/// Render the login page.
///
/// Already-authenticated admins are sent straight to the dashboard.
///
/// GET /admin/login
pub async fn login_page(OptionalAdminAuth(admin): OptionalAdminAuth) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin/dashboard").into_response();
    }
    LoginPageTemplate.into_response()
}

/// Render the dashboard: product table plus the settings panel.
///
/// GET /admin/dashboard
pub async fn dashboard(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    let products = ProductRepository::new(state.pool()).list().await?;

    let whatsapp_number = SettingsRepository::new(state.pool())
        .get(WHATSAPP_NUMBER_KEY)
        .await?
        .map_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string(), |s| s.value);

    Ok(DashboardTemplate {
        admin_email: admin.email.to_string(),
        products: products.iter().map(AdminProductView::from).collect(),
        whatsapp_number,
    })
}

//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::routes::products::{ProductView, whatsapp_number};
use crate::services::whatsapp;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
    pub wa_chat: String,
}

/// Display the home page: hero plus the featured collection.
///
/// Falls back to the latest products when nothing is featured yet.
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Result<HomeTemplate> {
    let repo = ProductRepository::new(state.pool());

    let mut products = repo.list_featured().await?;
    if products.is_empty() {
        products = repo.list().await?;
    }

    let number = whatsapp_number(&state).await?;

    Ok(HomeTemplate {
        products: products.iter().map(ProductView::from).collect(),
        wa_chat: whatsapp::chat_link(&number),
    })
}

//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::Result;
use crate::filters;
use crate::routes::products::whatsapp_number;
use crate::services::whatsapp;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub wa_chat: String,
}

/// Display the about page.
///
/// GET /about
pub async fn about(State(state): State<AppState>) -> Result<AboutTemplate> {
    let number = whatsapp_number(&state).await?;

    Ok(AboutTemplate {
        wa_chat: whatsapp::chat_link(&number),
    })
}

//! Storefront product pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use rust_decimal::Decimal;

use rekhali_core::{Slug, WhatsAppNumber};

use crate::db::{ProductRepository, SettingsRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::Product;
use crate::services::whatsapp;
use crate::state::AppState;

/// Image shown when a product has no photos yet.
const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Format a price for display.
#[must_use]
pub fn format_rupees(price: Decimal) -> String {
    format!("Rs. {price:.2}")
}

/// Product card data for listing templates.
#[derive(Clone)]
pub struct ProductView {
    pub slug: String,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub image: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        let image = p
            .hero_image
            .clone()
            .or_else(|| p.images.first().cloned())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Self {
            slug: p.slug.to_string(),
            name: p.name.clone(),
            price: format_rupees(p.price),
            original_price: p.original_price.map(format_rupees),
            image,
            in_stock: p.in_stock,
        }
    }
}

/// Product detail data for the show template.
pub struct ProductDetailView {
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub description: Option<String>,
    pub story: Option<String>,
    pub fabric: Option<String>,
    pub care_instructions: Option<String>,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub in_stock: bool,
    /// Prefilled `wa.me` order link (first size, quantity 1).
    pub wa_order: String,
    /// Digits-only WhatsApp number, for the page script that rebuilds the
    /// link when the customer picks a size or quantity.
    pub wa_digits: String,
}

impl ProductDetailView {
    /// Build the detail view.
    ///
    /// The server-rendered order link targets the first size with quantity
    /// 1; size and quantity selection on the page rebuilds it client-side.
    fn new(product: Product, number: &WhatsAppNumber) -> Self {
        let first_size = product.sizes.first().map_or("S", String::as_str);
        let wa_order =
            whatsapp::order_link(number, &product.name, product.price, first_size, 1);

        let images = if product.images.is_empty() {
            product
                .hero_image
                .clone()
                .map_or_else(|| vec![PLACEHOLDER_IMAGE.to_string()], |hero| vec![hero])
        } else {
            product.images
        };

        Self {
            name: product.name,
            price: format_rupees(product.price),
            original_price: product.original_price.map(format_rupees),
            description: product.description,
            story: product.story,
            fabric: product.fabric,
            care_instructions: product.care_instructions,
            sizes: product.sizes,
            images,
            in_stock: product.in_stock,
            wa_order,
            wa_digits: number.digits(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub wa_chat: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub wa_chat: String,
}

/// Display the product listing page.
///
/// GET /products
pub async fn index(State(state): State<AppState>) -> Result<ProductsIndexTemplate> {
    let products = ProductRepository::new(state.pool()).list().await?;
    let number = whatsapp_number(&state).await?;

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
        wa_chat: whatsapp::chat_link(&number),
    })
}

/// Display the product detail page.
///
/// GET /products/{slug}
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate> {
    let slug =
        Slug::parse(&slug).map_err(|_| AppError::NotFound(format!("product '{slug}'")))?;

    let product = ProductRepository::new(state.pool())
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}'")))?;

    let number = whatsapp_number(&state).await?;

    Ok(ProductShowTemplate {
        product: ProductDetailView::new(product, &number),
        wa_chat: whatsapp::chat_link(&number),
    })
}

/// Fetch the configured WhatsApp number (default fallback when unset).
pub async fn whatsapp_number(state: &AppState) -> Result<WhatsAppNumber> {
    let raw = SettingsRepository::new(state.pool())
        .whatsapp_number()
        .await?;
    Ok(WhatsAppNumber::new(raw))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use rekhali_core::ProductId;

    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::generate(),
            name: "HEER".to_string(),
            slug: Slug::parse("heer").unwrap(),
            description: None,
            story: None,
            price: Decimal::new(66600, 2),
            original_price: None,
            hero_image: None,
            images: vec!["/uploads/heer-front.jpg".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            fabric: None,
            care_instructions: None,
            in_stock: true,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(Decimal::new(66600, 2)), "Rs. 666.00");
        assert_eq!(format_rupees(Decimal::new(666, 0)), "Rs. 666.00");
        assert_eq!(format_rupees(Decimal::new(129950, 2)), "Rs. 1299.50");
    }

    #[test]
    fn test_detail_view_order_link_defaults_to_first_size() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        let view = ProductDetailView::new(sample_product(), &number);

        assert!(view.wa_order.starts_with("https://wa.me/919876543210?text="));
        assert!(view.wa_order.contains("Size%3A%20M"));
        assert!(view.wa_order.contains("Quantity%3A%201"));
    }

    #[test]
    fn test_detail_view_carries_digits_for_link_rebuilding() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        let view = ProductDetailView::new(sample_product(), &number);
        assert_eq!(view.wa_digits, "919876543210");
    }

    #[test]
    fn test_detail_view_falls_back_to_placeholder_image() {
        let mut product = sample_product();
        product.images.clear();

        let view = ProductDetailView::new(product, &WhatsAppNumber::new("919876543210"));
        assert_eq!(view.images, vec![PLACEHOLDER_IMAGE]);
    }

    #[test]
    fn test_detail_view_prefers_hero_image_when_gallery_empty() {
        let mut product = sample_product();
        product.images.clear();
        product.hero_image = Some("/uploads/hero.jpg".to_string());

        let view = ProductDetailView::new(product, &WhatsAppNumber::new("919876543210"));
        assert_eq!(view.images, vec!["/uploads/hero.jpg"]);
    }
}

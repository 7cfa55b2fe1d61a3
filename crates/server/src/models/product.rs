//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rekhali_core::{ProductId, Slug, SlugError};

use crate::error::AppError;

/// Default size run for new products.
pub const DEFAULT_SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// A catalog product as stored in the database.
///
/// `images` and `sizes` are ordered; the first image doubles as the gallery
/// cover when `hero_image` is unset.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub story: Option<String>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub hero_image: Option<String>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub fabric: Option<String>,
    pub care_instructions: Option<String>,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate fields for creating a product.
///
/// The slug is never accepted from the client; it is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub care_instructions: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl NewProduct {
    /// Validate the candidate and derive its slug.
    ///
    /// Applies the catalog defaults: sizes fall back to S/M/L/XL, products
    /// start in stock and not featured.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the name is empty or unusable,
    /// or when a price is negative.
    pub fn validate(self) -> Result<ValidProduct, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        let slug = Slug::derive(&self.name).map_err(|e: SlugError| {
            AppError::Validation(format!("name '{}' is unusable: {e}", self.name))
        })?;

        if self.price < Decimal::ZERO {
            return Err(AppError::Validation("price must not be negative".to_string()));
        }
        if matches!(self.original_price, Some(p) if p < Decimal::ZERO) {
            return Err(AppError::Validation(
                "original_price must not be negative".to_string(),
            ));
        }

        let sizes = if self.sizes.is_empty() {
            DEFAULT_SIZES.iter().map(ToString::to_string).collect()
        } else {
            self.sizes
        };

        Ok(ValidProduct {
            name: self.name,
            slug,
            description: self.description,
            story: self.story,
            price: self.price,
            original_price: self.original_price,
            hero_image: self.hero_image,
            images: self.images,
            sizes,
            fabric: self.fabric,
            care_instructions: self.care_instructions,
            in_stock: self.in_stock.unwrap_or(true),
            featured: self.featured.unwrap_or(false),
        })
    }
}

/// A validated product candidate, ready to persist.
#[derive(Debug, Clone)]
pub struct ValidProduct {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub story: Option<String>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub hero_image: Option<String>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub fabric: Option<String>,
    pub care_instructions: Option<String>,
    pub in_stock: bool,
    pub featured: bool,
}

/// Update request body: the target id plus the partial field set.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
    pub id: ProductId,
    #[serde(flatten)]
    pub changes: ProductChanges,
}

/// Partial field set for an update.
///
/// `None` means "leave unchanged" - explicit JSON nulls are treated the same
/// way as absent fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub care_instructions: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

impl ProductChanges {
    /// True when no field is being changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.story.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.hero_image.is_none()
            && self.images.is_none()
            && self.sizes.is_none()
            && self.fabric.is_none()
            && self.care_instructions.is_none()
            && self.in_stock.is_none()
            && self.featured.is_none()
    }

    /// Validate the changed fields.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for negative prices, an empty name,
    /// or an empty size list.
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if matches!(self.price, Some(p) if p < Decimal::ZERO) {
            return Err(AppError::Validation("price must not be negative".to_string()));
        }
        if matches!(self.original_price, Some(p) if p < Decimal::ZERO) {
            return Err(AppError::Validation(
                "original_price must not be negative".to_string(),
            ));
        }
        if matches!(&self.sizes, Some(s) if s.is_empty()) {
            return Err(AppError::Validation("sizes must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn candidate(name: &str, price: Decimal) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            story: None,
            price,
            original_price: None,
            hero_image: None,
            images: Vec::new(),
            sizes: Vec::new(),
            fabric: None,
            care_instructions: None,
            in_stock: None,
            featured: None,
        }
    }

    #[test]
    fn test_validate_applies_defaults() {
        let valid = candidate("HEER", Decimal::new(66600, 2)).validate().unwrap();
        assert_eq!(valid.slug.as_str(), "heer");
        assert_eq!(valid.sizes, vec!["S", "M", "L", "XL"]);
        assert!(valid.in_stock);
        assert!(!valid.featured);
    }

    #[test]
    fn test_validate_keeps_explicit_sizes() {
        let mut input = candidate("Anarkali Set", Decimal::new(129900, 2));
        input.sizes = vec!["Free Size".to_string()];
        let valid = input.validate().unwrap();
        assert_eq!(valid.sizes, vec!["Free Size"]);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(candidate("   ", Decimal::ONE).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        assert!(candidate("Heer", Decimal::new(-1, 0)).validate().is_err());
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(ProductChanges::default().is_empty());

        let changes = ProductChanges {
            price: Some(Decimal::TEN),
            ..ProductChanges::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_changes_validate() {
        let ok = ProductChanges {
            price: Some(Decimal::new(49900, 2)),
            ..ProductChanges::default()
        };
        assert!(ok.validate().is_ok());

        let bad = ProductChanges {
            sizes: Some(Vec::new()),
            ..ProductChanges::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_update_deserializes_flat_body() {
        let body = format!(
            r#"{{"id":"{}","price":"499.00"}}"#,
            uuid::Uuid::new_v4()
        );
        let update: ProductUpdate = serde_json::from_str(&body).unwrap();
        assert_eq!(update.changes.price, Some(Decimal::new(49900, 2)));
        assert!(update.changes.name.is_none());
    }
}

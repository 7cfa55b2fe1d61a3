//! Product repository for database operations.
//!
//! Queries are built at runtime with `query_as`/`QueryBuilder`; rows decode
//! straight into the [`Product`] domain type via `FromRow`.

use sqlx::{PgPool, Postgres, QueryBuilder};

use rekhali_core::{ProductId, Slug};

use super::RepositoryError;
use crate::models::product::{Product, ProductChanges, ValidProduct};

/// Columns selected/returned for every product query, in `FromRow` order.
const PRODUCT_COLUMNS: &str = "id, name, slug, description, story, price, original_price, \
     hero_image, images, sizes, fabric, care_instructions, in_stock, featured, \
     created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first. No pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// List featured products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_featured(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE featured ORDER BY created_at DESC"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(product)
    }

    /// Get a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?;
        Ok(product)
    }

    /// Persist a validated product candidate.
    ///
    /// The database generates the id and timestamps; the returned row is the
    /// persisted record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, candidate: &ValidProduct) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO products \
                 (name, slug, description, story, price, original_price, hero_image, \
                  images, sizes, fabric, care_instructions, in_stock, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {PRODUCT_COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&candidate.name)
            .bind(&candidate.slug)
            .bind(&candidate.description)
            .bind(&candidate.story)
            .bind(candidate.price)
            .bind(candidate.original_price)
            .bind(&candidate.hero_image)
            .bind(&candidate.images)
            .bind(&candidate.sizes)
            .bind(&candidate.fabric)
            .bind(&candidate.care_instructions)
            .bind(candidate.in_stock)
            .bind(candidate.featured)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict(format!(
                        "a product with slug '{}' already exists",
                        candidate.slug
                    ));
                }
                RepositoryError::Database(e)
            })?;

        Ok(product)
    }

    /// Apply a partial update, overwriting only the supplied fields.
    ///
    /// Always stamps `updated_at`. When the name changes the slug is
    /// re-derived alongside it (callers pass the new slug).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id does not exist.
    /// Returns `RepositoryError::Conflict` if a re-derived slug collides.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
        new_slug: Option<&Slug>,
    ) -> Result<Product, RepositoryError> {
        let mut qb = build_update_query(id, changes, new_slug);

        let product = qb
            .build_query_as::<Product>()
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("new slug already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        Ok(product)
    }

    /// Delete a product by ID.
    ///
    /// Idempotent: deleting an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

/// Assemble the partial-update statement.
///
/// Only supplied fields get a `SET` clause; `updated_at` is always stamped.
fn build_update_query<'args>(
    id: ProductId,
    changes: &'args ProductChanges,
    new_slug: Option<&'args Slug>,
) -> QueryBuilder<'args, Postgres> {
    let mut qb: QueryBuilder<'args, Postgres> =
        QueryBuilder::new("UPDATE products SET updated_at = now()");

    if let Some(name) = &changes.name {
        qb.push(", name = ").push_bind(name);
    }
    if let Some(slug) = new_slug {
        qb.push(", slug = ").push_bind(slug);
    }
    if let Some(description) = &changes.description {
        qb.push(", description = ").push_bind(description);
    }
    if let Some(story) = &changes.story {
        qb.push(", story = ").push_bind(story);
    }
    if let Some(price) = changes.price {
        qb.push(", price = ").push_bind(price);
    }
    if let Some(original_price) = changes.original_price {
        qb.push(", original_price = ").push_bind(original_price);
    }
    if let Some(hero_image) = &changes.hero_image {
        qb.push(", hero_image = ").push_bind(hero_image);
    }
    if let Some(images) = &changes.images {
        qb.push(", images = ").push_bind(images);
    }
    if let Some(sizes) = &changes.sizes {
        qb.push(", sizes = ").push_bind(sizes);
    }
    if let Some(fabric) = &changes.fabric {
        qb.push(", fabric = ").push_bind(fabric);
    }
    if let Some(care_instructions) = &changes.care_instructions {
        qb.push(", care_instructions = ").push_bind(care_instructions);
    }
    if let Some(in_stock) = changes.in_stock {
        qb.push(", in_stock = ").push_bind(in_stock);
    }
    if let Some(featured) = changes.featured {
        qb.push(", featured = ").push_bind(featured);
    }

    qb.push(" WHERE id = ").push_bind(id);
    qb.push(format!(" RETURNING {PRODUCT_COLUMNS}"));

    qb
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_update_query_includes_only_supplied_fields() {
        let changes = ProductChanges {
            price: Some(Decimal::new(49900, 2)),
            ..ProductChanges::default()
        };

        let qb = build_update_query(ProductId::generate(), &changes, None);
        let sql = qb.sql();

        assert!(sql.starts_with("UPDATE products SET updated_at = now(), price = $1"));
        assert!(sql.contains("WHERE id = $2"));
        assert!(!sql.contains("name ="));
        assert!(!sql.contains("in_stock ="));
        assert!(sql.ends_with(&format!(" RETURNING {PRODUCT_COLUMNS}")));
    }

    #[test]
    fn test_update_query_sets_slug_alongside_name() {
        let changes = ProductChanges {
            name: Some("NOOR".to_string()),
            ..ProductChanges::default()
        };
        let slug = Slug::derive("NOOR").unwrap();

        let qb = build_update_query(ProductId::generate(), &changes, Some(&slug));
        let sql = qb.sql();

        assert!(sql.contains("name = $1"));
        assert!(sql.contains("slug = $2"));
        assert!(sql.contains("WHERE id = $3"));
    }

    #[test]
    fn test_update_query_always_stamps_updated_at() {
        let changes = ProductChanges::default();
        let qb = build_update_query(ProductId::generate(), &changes, None);
        assert!(
            qb.sql()
                .starts_with("UPDATE products SET updated_at = now() WHERE id = $1")
        );
    }
}

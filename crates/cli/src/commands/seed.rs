//! Seed the catalog with demo products.
//!
//! Inserts a handful of example pieces so a fresh install has something
//! to show. Existing slugs are left untouched, so re-running is safe.
//!
//! # Usage
//!
//! ```bash
//! rekhali-cli seed
//! ```

use rust_decimal::Decimal;

use rekhali_core::Slug;

use super::CliError;

struct DemoProduct {
    name: &'static str,
    description: &'static str,
    story: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    fabric: &'static str,
    featured: bool,
}

const DEMO_PRODUCTS: [DemoProduct; 3] = [
    DemoProduct {
        name: "HEER",
        description: "A hand-embroidered kurta set in soft rose, with mirror work along the hem.",
        story: "Named for the heroine of Punjab's most loved folk tale, HEER carries weeks of \
                embroidery by artisans in Kutch.",
        price: "666.00",
        original_price: Some("799.00"),
        fabric: "Pure cotton with mirror embroidery",
        featured: true,
    },
    DemoProduct {
        name: "NOOR",
        description: "An ivory chanderi suit with gota patti detailing, made for festive evenings.",
        story: "NOOR means light. The gota patti catches every bit of it.",
        price: "1249.00",
        original_price: None,
        fabric: "Chanderi silk-cotton",
        featured: true,
    },
    DemoProduct {
        name: "MEERA",
        description: "A deep indigo anarkali in handloom cotton, block printed by hand.",
        story: "Block printed in Bagru using natural indigo, one panel at a time.",
        price: "949.00",
        original_price: Some("1100.00"),
        fabric: "Handloom cotton, natural dyes",
        featured: false,
    },
];

/// Insert the demo products.
pub async fn demo_products() -> Result<(), CliError> {
    let pool = super::connect().await?;

    let mut inserted = 0u32;
    for demo in &DEMO_PRODUCTS {
        let slug = Slug::derive(demo.name)
            .map_err(|e| CliError::SeedData(format!("bad product name '{}': {e}", demo.name)))?;
        let price: Decimal = demo
            .price
            .parse()
            .map_err(|_| CliError::SeedData(format!("bad price '{}'", demo.price)))?;
        let original_price = demo
            .original_price
            .map(str::parse::<Decimal>)
            .transpose()
            .map_err(|_| CliError::SeedData(format!("bad original price for '{}'", demo.name)))?;

        let result = sqlx::query(
            "INSERT INTO products
                 (name, slug, description, story, price, original_price, fabric, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(demo.name)
        .bind(slug.as_str())
        .bind(demo.description)
        .bind(demo.story)
        .bind(price)
        .bind(original_price)
        .bind(demo.fabric)
        .bind(demo.featured)
        .execute(&pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
            tracing::info!("Seeded product: {}", demo.name);
        } else {
            tracing::info!("Skipped existing product: {}", demo.name);
        }
    }

    tracing::info!("Seeding complete! {inserted} products inserted.");
    Ok(())
}

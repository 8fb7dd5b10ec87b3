//! Product business logic - Handles all product-related database operations.
//!
//! These functions are what the HTTP controllers call: a filtered listing, a
//! single insert, the popular-by-stock query used by the dashboard, and the
//! startup seeding routine. None of them validate prices, ratings, or stock
//! levels; whatever the caller sends is stored.

use crate::{
    config::seed::SeedProduct,
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Fields accepted when creating a product.
///
/// `product_id` is normally generated by the client; when it is missing a fresh
/// UUID v4 is assigned here so every stored product has an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Client-generated identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Rating
    pub rating: f64,
    /// Units in stock
    pub stock_quantity: i32,
}

/// Lists products, optionally keeping only those whose name contains `search`.
///
/// Matching is a case-sensitive substring test. The database narrows the rows
/// with `LIKE`, which `SQLite` evaluates case-insensitively, so the result is
/// filtered again in Rust. No ordering is applied.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn list_products(
    db: &DatabaseConnection,
    search: Option<&str>,
) -> Result<Vec<product::Model>> {
    let mut query = Product::find();
    if let Some(term) = search {
        query = query.filter(product::Column::Name.contains(term));
    }

    let mut products = query.all(db).await?;
    if let Some(term) = search {
        products.retain(|p| p.name.contains(term));
    }

    debug!("Fetched {} products.", products.len());
    Ok(products)
}

/// Inserts a single product and returns the stored row.
///
/// # Errors
/// Returns an error if the insert fails, including when `product_id` is
/// already taken.
#[instrument(skip(db, new_product), fields(name = %new_product.name))]
pub async fn create_product(
    db: &DatabaseConnection,
    new_product: NewProduct,
) -> Result<product::Model> {
    let product_id = new_product
        .product_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let product = product::ActiveModel {
        product_id: Set(product_id),
        name: Set(new_product.name),
        price: Set(new_product.price),
        rating: Set(new_product.rating),
        stock_quantity: Set(new_product.stock_quantity),
    };
    let created = product.insert(db).await?;

    info!(
        "Added new product '{}' (ID: {}) with price {} and stock {}",
        created.name, created.product_id, created.price, created.stock_quantity
    );
    Ok(created)
}

/// Returns up to `limit` products with the highest stock quantity, highest first.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn get_popular_products(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_desc(product::Column::StockQuantity)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts every seed product whose identifier is not already present.
///
/// Returns the number of rows inserted, so running it twice inserts nothing the
/// second time.
///
/// # Errors
/// Returns an error if a lookup or insert fails.
#[instrument(skip(db, seeds), fields(count = seeds.len()))]
pub async fn seed_products(db: &DatabaseConnection, seeds: &[SeedProduct]) -> Result<usize> {
    let mut inserted = 0;
    for seed in seeds {
        if Product::find_by_id(seed.product_id.clone())
            .one(db)
            .await?
            .is_some()
        {
            debug!("Seed product '{}' already present, skipping.", seed.product_id);
            continue;
        }

        create_product(
            db,
            NewProduct {
                product_id: Some(seed.product_id.clone()),
                name: seed.name.clone(),
                price: seed.price,
                rating: seed.rating,
                stock_quantity: seed.stock_quantity,
            },
        )
        .await?;
        inserted += 1;
    }
    info!("Seeded {} of {} products.", inserted, seeds.len());
    Ok(inserted)
}

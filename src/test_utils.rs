//! Shared test utilities.
//!
//! Helpers for setting up an in-memory database, building the HTTP app, and
//! creating products with sensible defaults.

use crate::{
    config::database::create_tables,
    core::product::{self, NewProduct},
    entities,
    errors::Result,
    state::AppState,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Installs a test-friendly subscriber; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Application state backed by a fresh in-memory database.
pub async fn setup_test_state() -> Result<AppState> {
    Ok(AppState::new(setup_test_db().await?))
}

/// Builds a creation payload with a fresh identifier.
///
/// # Defaults
/// * price: 10.0
/// * rating: 3.0
/// * `stock_quantity`: 1
pub fn new_product(name: &str) -> NewProduct {
    NewProduct {
        product_id: Some(Uuid::new_v4().to_string()),
        name: name.to_string(),
        price: 10.0,
        rating: 3.0,
        stock_quantity: 1,
    }
}

/// Creates a product with the given stock level and default price and rating.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    stock_quantity: i32,
) -> Result<entities::product::Model> {
    let mut payload = new_product(name);
    payload.stock_quantity = stock_quantity;
    product::create_product(db, payload).await
}

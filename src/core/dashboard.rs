//! Dashboard metrics.
//!
//! The dashboard only reports on the products table: the best-stocked items,
//! ordered by quantity on hand.

use crate::{core::product::get_popular_products, entities::product, errors::Result};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::instrument;

/// Number of products shown in the popular products panel.
pub const POPULAR_PRODUCTS_LIMIT: u64 = 15;

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Products with the most units in stock, highest first
    pub popular_products: Vec<product::Model>,
}

/// Collects the dashboard metrics.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn get_dashboard_metrics(db: &DatabaseConnection) -> Result<DashboardMetrics> {
    let popular_products = get_popular_products(db, POPULAR_PRODUCTS_LIMIT).await?;
    Ok(DashboardMetrics { popular_products })
}

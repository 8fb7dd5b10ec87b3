//! Product entity - A stock-keeping item in the inventory.
//!
//! The identifier is generated by the client (a UUID v4 string) and is never
//! changed after the row is inserted. Serialized field names are camelCase so the
//! model can be returned from the HTTP API as-is.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier, assigned once at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    /// Display name of the product
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Customer rating, usually between 0 and 5
    pub rating: f64,
    /// Units currently in stock
    pub stock_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
/// Products have no relations
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

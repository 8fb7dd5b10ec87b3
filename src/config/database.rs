//! Database configuration and connection management.
//!
//! Opens the SeaORM connection pool and creates the tables from the entity
//! definitions. Schema generation goes through `Schema::create_table_from_entity`,
//! so the table layout always matches the Rust structs without hand-written SQL.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default database location when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.sqlite?mode=rwc";

/// Opens the connection pool and makes sure every table exists.
///
/// This is the only place the pool is created; the handle is shared with the
/// HTTP workers and closed by `main` once the server has stopped.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {}", database_url);
    let db = Database::connect(database_url).await?;
    info!("Database connection opened. Ensuring tables are created...");
    create_tables(&db).await?;
    Ok(db)
}

/// Creates all tables using `SeaORM`'s schema generation from entity definitions.
///
/// Statements are issued with `IF NOT EXISTS`, so calling this against an
/// existing database is a no-op.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;

    Ok(())
}

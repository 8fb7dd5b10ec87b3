use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use inventory_management::{
    config::{AppConfig, database, seed},
    core::product,
    errors::Result,
    state::AppState,
    web::configure_app_routes,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG from the file applies to the subscriber
    dotenv().ok();

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Load configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to load application configuration: {}", e))?;

    // 4. Open the connection pool; it lives until the server stops
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed products (optional)
    if let Some(seed_path) = &app_config.seed_file {
        let seed_config = seed::load_seed_file(seed_path)
            .inspect_err(|e| error!("Failed to load seed file: {}", e))?;
        product::seed_products(&db, &seed_config.products)
            .await
            .inspect_err(|e| error!("Failed to seed products: {}", e))?;
    }

    // 6. Serve until shutdown
    let app_state = AppState::new(db);
    let pool = Arc::clone(&app_state.db);
    let bind_address = app_config.bind_address();
    info!("Starting HTTP server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(configure_app_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    // 7. Tear down the pool
    info!("HTTP server stopped, closing database connections.");
    match Arc::try_unwrap(pool) {
        Ok(db) => db.close().await?,
        Err(_) => warn!("Database pool still shared at shutdown; leaving it to drop."),
    }
    Ok(())
}

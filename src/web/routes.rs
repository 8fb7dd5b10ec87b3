use crate::errors::Error;
use crate::web::handlers::{dashboard_handlers, product_handlers};
use actix_web::web;

// Extractor rejections go through `Error` so every failure has the same
// `{ "message": ... }` body and status.
fn payload_error(message: String) -> actix_web::Error {
    Error::Payload { message }.into()
}

/// Registers every route on the Actix app.
///
/// * `GET /products?search=` - list products, optionally filtered by name
/// * `POST /products` - create a product
/// * `GET /dashboard` - dashboard metrics
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| payload_error(err.to_string())),
    )
    .app_data(
        web::QueryConfig::default().error_handler(|err, _req| payload_error(err.to_string())),
    )
    .service(
        web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler)),
    )
    .route(
        "/dashboard",
        web::get().to(dashboard_handlers::dashboard_metrics_handler),
    );
}

//! HTTP layer: route table and request handlers.

/// Request handlers for products and the dashboard
pub mod handlers;
/// Route registration for the Actix app
pub mod routes;

pub use routes::configure_app_routes;

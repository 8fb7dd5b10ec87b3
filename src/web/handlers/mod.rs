/// `GET /dashboard`
pub mod dashboard_handlers;
/// `GET /products` and `POST /products`
pub mod product_handlers;

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::product::{self, NewProduct};
use crate::errors::Result;
use crate::state::AppState;

/// Query string accepted by `GET /products`.
#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
    /// Case-sensitive substring to look for in product names
    pub search: Option<String>,
}

/// `GET /products` - every product, or those whose name contains `search`.
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
    app_state: web::Data<AppState>,
    query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse> {
    let products = product::list_products(&app_state.db, query.search.as_deref()).await?;
    info!("Returning {} products.", products.len());
    Ok(HttpResponse::Ok().json(products))
}

/// `POST /products` - inserts the body as-is and returns the stored row with 201.
#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
    app_state: web::Data<AppState>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse> {
    let created = product::create_product(&app_state.db, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

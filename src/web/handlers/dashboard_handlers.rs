use actix_web::{HttpResponse, web};
use tracing::instrument;

use crate::core::dashboard;
use crate::errors::Result;
use crate::state::AppState;

/// `GET /dashboard` - metrics for the dashboard page.
#[instrument(name = "handler::dashboard_metrics", skip(app_state))]
pub async fn dashboard_metrics_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let metrics = dashboard::get_dashboard_metrics(&app_state.db).await?;
    Ok(HttpResponse::Ok().json(metrics))
}

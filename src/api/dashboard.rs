use actix_web::{HttpResponse, web};

use crate::error::ApiResult;
use crate::model::dashboard::DashboardSummary;
use crate::service::dashboard::Dashboard;

/// Today's roster coverage
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Summary for the current date", body = DashboardSummary),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn summary(dashboard: web::Data<Dashboard>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(dashboard.summary().await?))
}

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::reports::services::ReportService;

/// Dashboard headline numbers
/// GET /api/reports/dashboard/
pub async fn dashboard(
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.dashboard().await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Full report aggregates
/// GET /api/reports/metrics/
pub async fn metrics(service: web::Data<Arc<ReportService>>) -> Result<HttpResponse, AppError> {
    let report = service.metrics().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/dashboard/", web::get().to(dashboard))
            .route("/metrics/", web::get().to(metrics)),
    );
}

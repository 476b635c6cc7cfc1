use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::quotations::models::QuotationRequest;
use crate::modules::quotations::services::QuotationService;

#[derive(Debug, Deserialize)]
pub struct ListQuotationsQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// List quotations
/// GET /api/quotations/
pub async fn list_quotations(
    service: web::Data<Arc<QuotationService>>,
    query: web::Query<ListQuotationsQuery>,
) -> Result<HttpResponse, AppError> {
    let quotations = service.list(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(quotations))
}

/// Fetch one quotation with its line items
/// GET /api/quotations/{id}/
pub async fn get_quotation(
    service: web::Data<Arc<QuotationService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quotation = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quotation))
}

/// Create a quotation
/// POST /api/quotations/
pub async fn create_quotation(
    service: web::Data<Arc<QuotationService>>,
    request: web::Json<QuotationRequest>,
) -> Result<HttpResponse, AppError> {
    let quotation = service.create(&request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quotation))
}

/// Update a quotation and its line items
/// PUT /api/quotations/{id}/
pub async fn update_quotation(
    service: web::Data<Arc<QuotationService>>,
    path: web::Path<i64>,
    request: web::Json<QuotationRequest>,
) -> Result<HttpResponse, AppError> {
    let quotation = service
        .update(path.into_inner(), &request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quotation))
}

/// Configure quotation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/quotations")
            .route("/", web::get().to(list_quotations))
            .route("/", web::post().to(create_quotation))
            .route("/{id}/", web::get().to(get_quotation))
            .route("/{id}/", web::put().to(update_quotation)),
    );
}

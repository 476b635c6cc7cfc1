use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::invoices::models::InvoiceRequest;
use crate::modules::invoices::services::InvoiceService;

#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// List invoices
/// GET /api/invoices/
pub async fn list_invoices(
    service: web::Data<Arc<InvoiceService>>,
    query: web::Query<ListInvoicesQuery>,
) -> Result<HttpResponse, AppError> {
    let invoices = service.list(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(invoices))
}

/// Fetch one invoice with its line items
/// GET /api/invoices/{id}/
pub async fn get_invoice(
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(invoice))
}

/// Create an invoice
/// POST /api/invoices/
pub async fn create_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<InvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create(&request.into_inner()).await?;
    Ok(HttpResponse::Created().json(invoice))
}

/// Update an invoice and its line items
/// PUT /api/invoices/{id}/
pub async fn update_invoice(
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<i64>,
    request: web::Json<InvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service
        .update(path.into_inner(), &request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(invoice))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("/", web::get().to(list_invoices))
            .route("/", web::post().to(create_invoice))
            .route("/{id}/", web::get().to(get_invoice))
            .route("/{id}/", web::put().to(update_invoice)),
    );
}

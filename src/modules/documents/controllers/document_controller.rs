use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::documents::services::DocumentService;

/// Print view for an invoice
/// GET /api/invoices/{id}/document/
pub async fn invoice_document(
    service: web::Data<Arc<DocumentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let view = service.invoice_document(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Print view for a quotation
/// GET /api/quotations/{id}/document/
pub async fn quotation_document(
    service: web::Data<Arc<DocumentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let view = service.quotation_document(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// Prefilled email for an invoice
/// GET /api/invoices/{id}/email-draft/
pub async fn invoice_email_draft(
    service: web::Data<Arc<DocumentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let draft = service.invoice_email_draft(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(draft))
}

/// Prefilled email for a quotation
/// GET /api/quotations/{id}/email-draft/
pub async fn quotation_email_draft(
    service: web::Data<Arc<DocumentService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let draft = service.quotation_email_draft(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(draft))
}

/// Configure document routes.
///
/// These must be registered before the invoice and quotation scopes so
/// the nested paths are matched here instead of falling into those
/// scopes' 404 handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/invoices/{id}/document/",
        web::get().to(invoice_document),
    );
    cfg.route(
        "/invoices/{id}/email-draft/",
        web::get().to(invoice_email_draft),
    );
    cfg.route(
        "/quotations/{id}/document/",
        web::get().to(quotation_document),
    );
    cfg.route(
        "/quotations/{id}/email-draft/",
        web::get().to(quotation_email_draft),
    );
}

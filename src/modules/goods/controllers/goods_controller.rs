use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::goods::models::{IncomingGoodRequest, SupplierRequest};
use crate::modules::goods::repositories::GoodsRepository;

#[derive(Debug, Deserialize)]
pub struct ListGoodsQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// List incoming stock entries
/// GET /api/incoming-goods/
pub async fn list_incoming_goods(
    repo: web::Data<Arc<GoodsRepository>>,
    query: web::Query<ListGoodsQuery>,
) -> Result<HttpResponse, AppError> {
    let goods = repo.list_incoming_goods(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(goods))
}

/// Record incoming stock
/// POST /api/incoming-goods/
pub async fn create_incoming_good(
    repo: web::Data<Arc<GoodsRepository>>,
    request: web::Json<IncomingGoodRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    repo.find_supplier(request.supplier).await?.ok_or_else(|| {
        AppError::validation(format!("Supplier {} does not exist", request.supplier))
    })?;

    let good = repo.create_incoming_good(&request).await?;
    Ok(HttpResponse::Created().json(good))
}

/// List suppliers
/// GET /api/suppliers/
pub async fn list_suppliers(
    repo: web::Data<Arc<GoodsRepository>>,
    query: web::Query<ListGoodsQuery>,
) -> Result<HttpResponse, AppError> {
    let suppliers = repo.list_suppliers(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(suppliers))
}

/// Create a supplier
/// POST /api/suppliers/
pub async fn create_supplier(
    repo: web::Data<Arc<GoodsRepository>>,
    request: web::Json<SupplierRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let supplier = repo.create_supplier(&request).await?;
    Ok(HttpResponse::Created().json(supplier))
}

/// Configure goods and supplier routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/incoming-goods")
            .route("/", web::get().to(list_incoming_goods))
            .route("/", web::post().to(create_incoming_good)),
    );
    cfg.service(
        web::scope("/suppliers")
            .route("/", web::get().to(list_suppliers))
            .route("/", web::post().to(create_supplier)),
    );
}

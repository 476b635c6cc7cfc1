use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::customers::models::CustomerRequest;
use crate::modules::customers::repositories::CustomerRepository;

#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// List customers
/// GET /api/customer/
pub async fn list_customers(
    repo: web::Data<Arc<CustomerRepository>>,
    query: web::Query<ListCustomersQuery>,
) -> Result<HttpResponse, AppError> {
    let customers = repo.list(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// Create a customer
/// POST /api/customer/
pub async fn create_customer(
    repo: web::Data<Arc<CustomerRepository>>,
    request: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let customer = repo.create(&request).await?;
    Ok(HttpResponse::Created().json(customer))
}

/// Update a customer
/// PUT /api/customer/{id}/
pub async fn update_customer(
    repo: web::Data<Arc<CustomerRepository>>,
    path: web::Path<i64>,
    request: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let customer = repo.update(path.into_inner(), &request).await?;
    Ok(HttpResponse::Ok().json(customer))
}

/// Delete a customer
/// DELETE /api/customer/{id}/
pub async fn delete_customer(
    repo: web::Data<Arc<CustomerRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    repo.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customer")
            .route("/", web::get().to(list_customers))
            .route("/", web::post().to(create_customer))
            .route("/{id}/", web::put().to(update_customer))
            .route("/{id}/", web::delete().to(delete_customer)),
    );
}

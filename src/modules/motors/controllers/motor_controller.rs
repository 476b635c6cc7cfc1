use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::motors::models::MotorRequest;
use crate::modules::motors::repositories::MotorRepository;

#[derive(Debug, Deserialize)]
pub struct ListMotorsQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// List motor winding specifications
/// GET /api/motors/
pub async fn list_motors(
    repo: web::Data<Arc<MotorRepository>>,
    query: web::Query<ListMotorsQuery>,
) -> Result<HttpResponse, AppError> {
    let motors = repo.list(query.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(motors))
}

/// Fetch one motor
/// GET /api/motors/{id}/
pub async fn get_motor(
    repo: web::Data<Arc<MotorRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let motor = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Motor {} not found", id)))?;
    Ok(HttpResponse::Ok().json(motor))
}

/// Create a motor
/// POST /api/motors/
pub async fn create_motor(
    repo: web::Data<Arc<MotorRepository>>,
    request: web::Json<MotorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let motor = repo.create(&request).await?;
    Ok(HttpResponse::Created().json(motor))
}

/// Update a motor
/// PUT /api/motors/{id}/
pub async fn update_motor(
    repo: web::Data<Arc<MotorRepository>>,
    path: web::Path<i64>,
    request: web::Json<MotorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let motor = repo.update(path.into_inner(), &request).await?;
    Ok(HttpResponse::Ok().json(motor))
}

/// Delete a motor
/// DELETE /api/motors/{id}/
pub async fn delete_motor(
    repo: web::Data<Arc<MotorRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    repo.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure motor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/motors")
            .route("/", web::get().to(list_motors))
            .route("/", web::post().to(create_motor))
            .route("/{id}/", web::get().to(get_motor))
            .route("/{id}/", web::put().to(update_motor))
            .route("/{id}/", web::delete().to(delete_motor)),
    );
}

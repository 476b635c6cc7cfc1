use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::auth::models::LoginRequest;
use crate::modules::auth::services::AuthService;

/// Exchange credentials for an access/refresh token pair
/// POST /api/token/
pub async fn issue_token(
    service: web::Data<Arc<AuthService>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let pair = service.login(&request.username, &request.password)?;
    Ok(HttpResponse::Ok().json(pair))
}

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/token/", web::post().to(issue_token));
}

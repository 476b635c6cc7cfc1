use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::warn;

use crate::core::error::AppError;
use crate::modules::settings::models::{SettingsUpdate, SharedSettings};

/// Apply company/SMTP settings best-effort.
///
/// Unparseable payloads are logged and acknowledged rather than
/// rejected; the caller treats this endpoint as fire-and-forget.
/// POST /api/settings/
pub async fn update_settings(
    settings: web::Data<SharedSettings>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    match serde_json::from_slice::<SettingsUpdate>(&body) {
        Ok(update) => settings.apply(update),
        Err(e) => warn!("Ignoring malformed settings payload: {}", e),
    }

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

/// Configure settings routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/settings/", web::post().to(update_settings));
}

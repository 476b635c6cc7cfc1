use std::sync::Arc;

use actix_multipart::form::bytes::Bytes;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::error::AppError;
use crate::modules::email::services::{EmailAttachment, Mailer};

/// Multipart payload: recipient, subject, body text and the rendered
/// document as a file part
#[derive(Debug, MultipartForm)]
pub struct SendEmailForm {
    pub email: Text<String>,
    pub subject: Text<String>,
    pub message: Text<String>,
    pub file: Bytes,
}

/// Send a document to a customer
/// POST /api/send-email/
pub async fn send_email(
    mailer: web::Data<Arc<Mailer>>,
    MultipartForm(form): MultipartForm<SendEmailForm>,
) -> Result<HttpResponse, AppError> {
    let recipient = form.email.into_inner();
    if recipient.trim().is_empty() {
        return Err(AppError::validation("Recipient email cannot be empty"));
    }

    let attachment = EmailAttachment {
        filename: form
            .file
            .file_name
            .clone()
            .unwrap_or_else(|| "document.pdf".to_string()),
        content_type: form
            .file
            .content_type
            .as_ref()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        data: form.file.data.to_vec(),
    };

    mailer
        .send(
            recipient.trim(),
            &form.subject.into_inner(),
            &form.message.into_inner(),
            Some(attachment),
        )
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "status": "sent" })))
}

/// Configure email routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/send-email/", web::post().to(send_email));
}

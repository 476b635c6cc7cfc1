use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::settings::SharedSettings;

/// A file attached to an outgoing message
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Sends documents over SMTP using the live settings, so credential
/// changes apply without a restart
pub struct Mailer {
    settings: SharedSettings,
}

impl Mailer {
    pub fn new(settings: SharedSettings) -> Self {
        Self { settings }
    }

    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment: Option<EmailAttachment>,
    ) -> Result<()> {
        let smtp = self.settings.smtp();

        if !smtp.is_configured() {
            return Err(AppError::email(
                "SMTP is not configured; set SMTP_HOST and SMTP_FROM",
            ));
        }

        let from = smtp
            .from_address
            .parse()
            .map_err(|_| AppError::email(format!("Invalid sender address: {}", smtp.from_address)))?;
        let to_mailbox = to
            .parse()
            .map_err(|_| AppError::email(format!("Invalid recipient address: {}", to)))?;

        let text_part = SinglePart::plain(body.to_string());

        let message = match attachment {
            Some(attachment) => {
                let content_type = ContentType::parse(&attachment.content_type)
                    .or_else(|_| ContentType::parse("application/octet-stream"))
                    .map_err(|e| AppError::email(format!("Invalid attachment type: {}", e)))?;
                let file_part =
                    Attachment::new(attachment.filename).body(attachment.data, content_type);

                Message::builder()
                    .from(from)
                    .to(to_mailbox)
                    .subject(subject)
                    .multipart(MultiPart::mixed().singlepart(text_part).singlepart(file_part))
            }
            None => Message::builder()
                .from(from)
                .to(to_mailbox)
                .subject(subject)
                .singlepart(text_part),
        }
        .map_err(|e| AppError::email(format!("Failed to build message: {}", e)))?;

        let mut transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| AppError::email(format!("Invalid SMTP relay: {}", e)))?
            .port(smtp.port);

        if !smtp.username.is_empty() {
            transport =
                transport.credentials(Credentials::new(smtp.username.clone(), smtp.password));
        }

        transport
            .build()
            .send(message)
            .await
            .map_err(|e| AppError::email(format!("SMTP send failed: {}", e)))?;

        info!(%to, %subject, "Email sent");

        Ok(())
    }
}

pub mod mailer;

pub use mailer::{EmailAttachment, Mailer};

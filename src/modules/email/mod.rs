pub mod controllers;
pub mod services;

pub use services::{EmailAttachment, Mailer};

pub mod auth;
pub mod billing;
pub mod customers;
pub mod documents;
pub mod email;
pub mod goods;
pub mod invoices;
pub mod motors;
pub mod quotations;
pub mod reports;
pub mod settings;

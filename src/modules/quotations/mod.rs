pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    quotation_total, QuotationDetail, QuotationItem, QuotationRequest, QuotationStatus,
    QuotationSummary,
};

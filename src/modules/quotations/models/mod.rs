pub mod quotation;
pub mod quotation_item;

pub use quotation::{
    quotation_total, QuotationDetail, QuotationRequest, QuotationStatus, QuotationSummary,
};
pub use quotation_item::QuotationItem;

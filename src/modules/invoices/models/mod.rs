pub mod invoice;
pub mod line_item;

pub use invoice::{InvoiceDetail, InvoiceRequest, InvoiceStatus, InvoiceSummary};
pub use line_item::InvoiceItem;

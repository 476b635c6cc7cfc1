pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    BillTo, CompanyBlock, DocumentKind, DocumentRow, DocumentSource, DocumentView, EmailDraft,
    TotalsBlock,
};
pub use services::assembler;

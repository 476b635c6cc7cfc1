pub mod document;

pub use document::{
    BillTo, CompanyBlock, DocumentKind, DocumentRow, DocumentSource, DocumentView, EmailDraft,
    TotalsBlock,
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CompanyProfile;
use crate::modules::invoices::models::InvoiceDetail;
use crate::modules::quotations::models::QuotationDetail;

/// Which document a view renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Quotation,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Quotation => "Quotation",
        }
    }
}

/// Company identity block printed at the top of every document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyBlock {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub gstin: String,
}

impl From<&CompanyProfile> for CompanyBlock {
    fn from(profile: &CompanyProfile) -> Self {
        Self {
            name: profile.name.clone(),
            address: profile.address.clone(),
            phone: profile.phone.clone(),
            gstin: profile.gstin.clone(),
        }
    }
}

/// Recipient block; missing contact fields are left out of the payload
/// rather than rendered as placeholders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillTo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One printable table row; filler rows carry no serial or amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_no: Option<u32>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl DocumentRow {
    pub fn filler() -> Self {
        Self {
            sl_no: None,
            description: String::new(),
            amount: None,
        }
    }

    pub fn is_filler(&self) -> bool {
        self.sl_no.is_none()
    }
}

/// Money summary at the foot of the document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsBlock {
    pub subtotal: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_amount: Option<Decimal>,
    pub grand_total: Decimal,
}

/// A ready-to-send email for a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Fully assembled, print-ready document payload
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub kind: DocumentKind,
    pub human_id: String,
    pub date: NaiveDate,
    pub company: CompanyBlock,
    pub bill_to: BillTo,
    pub rows: Vec<DocumentRow>,
    pub totals: TotalsBlock,
    pub amount_in_words: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub signatory: String,
}

/// The document-relevant slice of an invoice or quotation, with the
/// line items flattened to (serial, description, amount) rows
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub kind: DocumentKind,
    pub human_id: String,
    pub date: NaiveDate,
    pub customer_name: String,
    pub customer_address: Option<String>,
    pub customer_gst: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub gst_applied: bool,
    pub gst_rate: Decimal,
    pub grand_total: Decimal,
    pub notes: Option<String>,
    pub rows: Vec<(u32, String, Decimal)>,
}

impl From<&InvoiceDetail> for DocumentSource {
    fn from(invoice: &InvoiceDetail) -> Self {
        Self {
            kind: DocumentKind::Invoice,
            human_id: invoice.invoice_id.clone(),
            date: invoice.date,
            customer_name: invoice.customer_name.clone(),
            customer_address: invoice.customer_address.clone(),
            customer_gst: invoice.customer_gst.clone(),
            customer_phone: invoice.customer_phone.clone(),
            customer_email: invoice.customer_email.clone(),
            gst_applied: invoice.gst_applied,
            gst_rate: invoice.gst_rate,
            grand_total: invoice.final_amount,
            notes: invoice.notes.clone(),
            rows: invoice
                .items
                .iter()
                .map(|i| (i.sl_no, i.description.clone(), i.price))
                .collect(),
        }
    }
}

impl From<&QuotationDetail> for DocumentSource {
    fn from(quotation: &QuotationDetail) -> Self {
        Self {
            kind: DocumentKind::Quotation,
            human_id: quotation.quotation_id.clone(),
            date: quotation.date,
            customer_name: quotation.customer_name.clone(),
            customer_address: quotation.customer_address.clone(),
            customer_gst: quotation.customer_gst.clone(),
            customer_phone: quotation.customer_phone.clone(),
            customer_email: quotation.customer_email.clone(),
            gst_applied: quotation.gst_applied,
            gst_rate: quotation.gst_rate,
            grand_total: quotation.total_amount,
            notes: quotation.notes.clone(),
            rows: quotation
                .items
                .iter()
                .map(|i| (i.sl_no, i.description.clone(), i.price))
                .collect(),
        }
    }
}

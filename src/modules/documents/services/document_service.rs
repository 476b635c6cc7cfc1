use std::sync::Arc;

use crate::config::CompanyProfile;
use crate::core::{AppError, Result};
use crate::modules::documents::models::{DocumentSource, DocumentView, EmailDraft};
use crate::modules::documents::services::assembler;
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::quotations::repositories::QuotationRepository;
use crate::modules::settings::SharedSettings;

/// Loads a document and renders its print view or email draft against
/// the current company profile
pub struct DocumentService {
    invoices: Arc<InvoiceRepository>,
    quotations: Arc<QuotationRepository>,
    settings: SharedSettings,
}

impl DocumentService {
    pub fn new(
        invoices: Arc<InvoiceRepository>,
        quotations: Arc<QuotationRepository>,
        settings: SharedSettings,
    ) -> Self {
        Self {
            invoices,
            quotations,
            settings,
        }
    }

    pub async fn invoice_document(&self, id: i64) -> Result<DocumentView> {
        let source = self.invoice_source(id).await?;
        Ok(assembler::assemble(&source, &self.company()))
    }

    pub async fn quotation_document(&self, id: i64) -> Result<DocumentView> {
        let source = self.quotation_source(id).await?;
        Ok(assembler::assemble(&source, &self.company()))
    }

    pub async fn invoice_email_draft(&self, id: i64) -> Result<EmailDraft> {
        let source = self.invoice_source(id).await?;
        Ok(assembler::email_draft(&source, &self.company()))
    }

    pub async fn quotation_email_draft(&self, id: i64) -> Result<EmailDraft> {
        let source = self.quotation_source(id).await?;
        Ok(assembler::email_draft(&source, &self.company()))
    }

    async fn invoice_source(&self, id: i64) -> Result<DocumentSource> {
        let invoice = self
            .invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Invoice {} not found", id)))?;
        Ok(DocumentSource::from(&invoice))
    }

    async fn quotation_source(&self, id: i64) -> Result<DocumentSource> {
        let quotation = self
            .quotations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Quotation {} not found", id)))?;
        Ok(DocumentSource::from(&quotation))
    }

    fn company(&self) -> CompanyProfile {
        self.settings.company()
    }
}

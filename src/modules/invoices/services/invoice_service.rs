use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::models::{InvoiceDetail, InvoiceRequest, InvoiceSummary};
use crate::modules::invoices::repositories::InvoiceRepository;

/// Orchestrates invoice writes: validation, total recomputation and
/// persistence.
pub struct InvoiceService {
    invoices: Arc<InvoiceRepository>,
    customers: Arc<CustomerRepository>,
}

impl InvoiceService {
    pub fn new(invoices: Arc<InvoiceRepository>, customers: Arc<CustomerRepository>) -> Self {
        Self {
            invoices,
            customers,
        }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<InvoiceSummary>> {
        self.invoices.list(search).await
    }

    pub async fn get(&self, id: i64) -> Result<InvoiceDetail> {
        self.invoices
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Invoice {} not found", id)))
    }

    pub async fn create(&self, request: &InvoiceRequest) -> Result<InvoiceDetail> {
        request.validate()?;
        self.ensure_customer_exists(request.customer).await?;

        let (items, final_amount) = request.normalize();
        let gst_rate = request.effective_gst_rate();

        let id = self
            .invoices
            .create(
                &request.invoice_id,
                request.customer,
                request.date,
                request.status,
                final_amount,
                request.gst_applied,
                gst_rate,
                request.notes.as_deref(),
                &items,
            )
            .await?;

        info!(
            invoice_id = %request.invoice_id,
            %final_amount,
            items = items.len(),
            "Invoice created"
        );

        self.get(id).await
    }

    pub async fn update(&self, id: i64, request: &InvoiceRequest) -> Result<InvoiceDetail> {
        request.validate()?;
        self.ensure_customer_exists(request.customer).await?;

        let (items, final_amount) = request.normalize();
        let gst_rate = request.effective_gst_rate();

        self.invoices
            .update(
                id,
                request.customer,
                request.date,
                request.status,
                final_amount,
                request.gst_applied,
                gst_rate,
                request.notes.as_deref(),
                &items,
            )
            .await?;

        info!(invoice = id, %final_amount, "Invoice updated");

        self.get(id).await
    }

    async fn ensure_customer_exists(&self, customer: i64) -> Result<()> {
        self.customers
            .find_by_id(customer)
            .await?
            .ok_or_else(|| AppError::validation(format!("Customer {} does not exist", customer)))?;
        Ok(())
    }
}

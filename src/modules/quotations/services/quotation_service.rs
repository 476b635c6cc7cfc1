use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::quotations::models::{QuotationDetail, QuotationRequest, QuotationSummary};
use crate::modules::quotations::repositories::QuotationRepository;

/// Orchestrates quotation writes
pub struct QuotationService {
    quotations: Arc<QuotationRepository>,
    customers: Arc<CustomerRepository>,
}

impl QuotationService {
    pub fn new(quotations: Arc<QuotationRepository>, customers: Arc<CustomerRepository>) -> Self {
        Self {
            quotations,
            customers,
        }
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<QuotationSummary>> {
        self.quotations.list(search).await
    }

    pub async fn get(&self, id: i64) -> Result<QuotationDetail> {
        self.quotations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Quotation {} not found", id)))
    }

    pub async fn create(&self, request: &QuotationRequest) -> Result<QuotationDetail> {
        request.validate()?;
        self.ensure_customer_exists(request.customer).await?;

        let items = request.normalize();

        let id = self
            .quotations
            .create(
                &request.quotation_id,
                request.customer,
                request.date,
                request.status,
                request.gst_applied,
                request.effective_gst_rate(),
                request.notes.as_deref(),
                &items,
            )
            .await?;

        info!(
            quotation_id = %request.quotation_id,
            items = items.len(),
            "Quotation created"
        );

        self.get(id).await
    }

    pub async fn update(&self, id: i64, request: &QuotationRequest) -> Result<QuotationDetail> {
        request.validate()?;
        self.ensure_customer_exists(request.customer).await?;

        let items = request.normalize();

        self.quotations
            .update(
                id,
                request.customer,
                request.date,
                request.status,
                request.gst_applied,
                request.effective_gst_rate(),
                request.notes.as_deref(),
                &items,
            )
            .await?;

        info!(quotation = id, "Quotation updated");

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

use std::sync::Arc;

use chrono::Utc;

use crate::core::Result;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::goods::repositories::GoodsRepository;
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::motors::repositories::MotorRepository;
use crate::modules::reports::models::{DashboardSummary, ReportMetrics};
use crate::modules::reports::services::aggregator;

const RECENT_LIMIT: usize = 5;
const OUTSTANDING_LIMIT: usize = 5;
const REPORT_STOCK_LIMIT: usize = 6;

/// Fetches the collections once and hands them to the pure aggregator
pub struct ReportService {
    invoices: Arc<InvoiceRepository>,
    customers: Arc<CustomerRepository>,
    motors: Arc<MotorRepository>,
    goods: Arc<GoodsRepository>,
}

impl ReportService {
    pub fn new(
        invoices: Arc<InvoiceRepository>,
        customers: Arc<CustomerRepository>,
        motors: Arc<MotorRepository>,
        goods: Arc<GoodsRepository>,
    ) -> Self {
        Self {
            invoices,
            customers,
            motors,
            goods,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        let invoices = self.invoices.list(None).await?;
        let goods = self.goods.list_incoming_goods(None).await?;
        let total_customers = self.customers.count().await?;
        let total_motors = self.motors.count().await?;

        let today = Utc::now().date_naive();

        Ok(DashboardSummary {
            total_invoices: invoices.len(),
            total_customers,
            total_motors,
            incoming_goods_count: goods.len(),
            pending_amount: aggregator::pending_amount(&invoices),
            total_revenue: aggregator::total_revenue(&invoices),
            monthly_growth_percent: aggregator::monthly_growth_percent(&invoices, today),
            recent_invoices: aggregator::recent_invoices(&invoices, RECENT_LIMIT),
            stock_distribution: aggregator::stock_distribution(&goods, None),
        })
    }

    pub async fn metrics(&self) -> Result<ReportMetrics> {
        let invoices = self.invoices.list(None).await?;
        let goods = self.goods.list_incoming_goods(None).await?;

        let today = Utc::now().date_naive();

        Ok(ReportMetrics {
            total_invoices: invoices.len(),
            total_revenue: aggregator::total_revenue(&invoices),
            pending_amount: aggregator::pending_amount(&invoices),
            monthly_growth_percent: aggregator::monthly_growth_percent(&invoices, today),
            sales_by_month: aggregator::sales_by_month(&invoices),
            top_outstanding: aggregator::top_outstanding(&invoices, OUTSTANDING_LIMIT),
            stock_distribution: aggregator::stock_distribution(&goods, Some(REPORT_STOCK_LIMIT)),
        })
    }
}

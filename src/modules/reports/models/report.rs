use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::invoices::models::InvoiceSummary;

/// One bucket of the January to December sales series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    pub month: String,
    pub amount: Decimal,
}

/// One customer's unpaid balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutstandingEntry {
    pub customer_name: String,
    pub amount: Decimal,
}

/// One slice of the stock value distribution, colored for charting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSlice {
    pub item_name: String,
    pub value: Decimal,
    pub color: String,
}

/// Headline numbers for the dashboard page
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_invoices: usize,
    pub total_customers: i64,
    pub total_motors: i64,
    pub incoming_goods_count: usize,
    pub pending_amount: Decimal,
    pub total_revenue: Decimal,
    pub monthly_growth_percent: Decimal,
    pub recent_invoices: Vec<InvoiceSummary>,
    pub stock_distribution: Vec<StockSlice>,
}

/// Full report page aggregates
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetrics {
    pub total_invoices: usize,
    pub total_revenue: Decimal,
    pub pending_amount: Decimal,
    pub monthly_growth_percent: Decimal,
    pub sales_by_month: Vec<MonthlySales>,
    pub top_outstanding: Vec<OutstandingEntry>,
    pub stock_distribution: Vec<StockSlice>,
}

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DashboardSummary, MonthlySales, OutstandingEntry, ReportMetrics, StockSlice};
pub use services::aggregator;

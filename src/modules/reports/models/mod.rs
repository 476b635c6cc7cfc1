pub mod report;

pub use report::{DashboardSummary, MonthlySales, OutstandingEntry, ReportMetrics, StockSlice};

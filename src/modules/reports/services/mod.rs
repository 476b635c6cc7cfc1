pub mod aggregator;
pub mod report_service;

pub use report_service::ReportService;

//! Rewindery Workshop Management Service
//!
//! Backend for a motor-rewinding workshop: customers, quotations,
//! invoices with GST billing, the motor winding-spec library, incoming
//! stock, reports and document email dispatch.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::documents;
pub use modules::invoices;
pub use modules::quotations;
pub use modules::reports;

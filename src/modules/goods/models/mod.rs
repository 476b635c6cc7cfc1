pub mod incoming_good;
pub mod supplier;

pub use incoming_good::{IncomingGood, IncomingGoodRequest};
pub use supplier::{Supplier, SupplierRequest};

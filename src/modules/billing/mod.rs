pub mod services;

pub use services::calculator::{self, DocumentTotals, Sequenced};
pub use services::words::amount_in_words;

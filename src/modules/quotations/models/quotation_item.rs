use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::billing::Sequenced;

/// A single priced row on a quotation.
///
/// Unlike invoice rows, quotation rows carry a directly entered price
/// with no quantity or rate breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationItem {
    /// Database id; absent for rows not yet persisted
    #[serde(default)]
    pub id: Option<i64>,

    /// 1-based serial number, contiguous within the quotation
    #[serde(default)]
    pub sl_no: u32,

    pub description: String,

    pub price: Decimal,
}

impl QuotationItem {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(AppError::validation("Item description cannot be empty"));
        }

        if self.description.len() > 255 {
            return Err(AppError::validation(
                "Item description cannot exceed 255 characters",
            ));
        }

        if self.price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Item price must be non-negative, got: {}",
                self.price
            )));
        }

        Ok(())
    }
}

impl Sequenced for QuotationItem {
    fn set_sl_no(&mut self, sl_no: u32) {
        self.sl_no = sl_no;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_price_rejected() {
        let item = QuotationItem {
            id: None,
            sl_no: 1,
            description: "Rewind".to_string(),
            price: dec!(-10),
        };
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let item = QuotationItem {
            id: None,
            sl_no: 1,
            description: "   ".to_string(),
            price: dec!(10),
        };
        assert!(item.validate().is_err());
    }
}

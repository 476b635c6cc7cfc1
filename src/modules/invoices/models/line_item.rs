use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round2;
use crate::core::{AppError, Result};
use crate::modules::billing::calculator;
use crate::modules::billing::Sequenced;

/// A single priced row on an invoice.
///
/// `price` is the row amount and is always recomputed from
/// quantity × rate; a client-supplied price is never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Database id; absent for rows not yet persisted
    #[serde(default)]
    pub id: Option<i64>,

    /// 1-based serial number, contiguous within the invoice
    #[serde(default)]
    pub sl_no: u32,

    pub description: String,

    pub quantity: Decimal,

    pub rate: Decimal,

    /// Row amount: quantity × rate
    #[serde(default)]
    pub price: Decimal,
}

impl InvoiceItem {
    /// Recompute the row amount from quantity and rate
    pub fn recompute_price(&mut self) {
        self.price = round2(calculator::line_amount(self.quantity, self.rate));
    }

    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(AppError::validation("Item description cannot be empty"));
        }

        if self.description.len() > 255 {
            return Err(AppError::validation(
                "Item description cannot exceed 255 characters",
            ));
        }

        if self.quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Item quantity must be positive, got: {}",
                self.quantity
            )));
        }

        if self.rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Item rate must be non-negative, got: {}",
                self.rate
            )));
        }

        Ok(())
    }
}

impl Sequenced for InvoiceItem {
    fn set_sl_no(&mut self, sl_no: u32) {
        self.sl_no = sl_no;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, rate: Decimal) -> InvoiceItem {
        InvoiceItem {
            id: None,
            sl_no: 1,
            description: "Rewind".to_string(),
            quantity,
            rate,
            price: Decimal::ZERO,
        }
    }

    #[test]
    fn test_recompute_price() {
        let mut row = item(dec!(2), dec!(500));
        row.recompute_price();
        assert_eq!(row.price, dec!(1000.00));
    }

    #[test]
    fn test_recompute_overrides_stale_price() {
        let mut row = item(dec!(3), dec!(150));
        row.price = dec!(9999);
        row.recompute_price();
        assert_eq!(row.price, dec!(450.00));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        assert!(item(dec!(-1), dec!(500)).validate().is_err());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        assert!(item(Decimal::ZERO, dec!(500)).validate().is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(item(dec!(1), dec!(-500)).validate().is_err());
    }
}

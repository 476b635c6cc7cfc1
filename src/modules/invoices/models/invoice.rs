use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round2;
use crate::core::{AppError, Result};
use crate::modules::billing::calculator;

use super::line_item::InvoiceItem;

/// Invoice payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Pending
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
            InvoiceStatus::Overdue => write!(f, "overdue"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// Invoice list row with the customer display name resolved
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub id: i64,
    pub invoice_id: String,
    pub customer: i64,
    pub customer_name: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub final_amount: Decimal,
    pub gst_applied: bool,
    pub gst_rate: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full invoice with resolved customer contact fields and line items
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    pub id: i64,
    pub invoice_id: String,
    pub customer: i64,
    pub customer_name: String,
    pub customer_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_gst: Option<String>,
    pub customer_phone: Option<String>,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub final_amount: Decimal,
    pub gst_applied: bool,
    pub gst_rate: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<InvoiceItem>,
}

/// Payload for creating or updating an invoice.
///
/// Items follow the nested writeback convention: an item with a known id
/// is updated in place, an id-less item is inserted, and persisted items
/// missing from the list are deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceRequest {
    pub invoice_id: String,
    pub customer: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub final_amount: Option<Decimal>,
    #[serde(default)]
    pub gst_applied: bool,
    #[serde(default)]
    pub gst_rate: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

impl InvoiceRequest {
    pub fn validate(&self) -> Result<()> {
        if self.invoice_id.trim().is_empty() {
            return Err(AppError::validation("Invoice ID cannot be empty"));
        }

        if self.invoice_id.len() > 50 {
            return Err(AppError::validation(
                "Invoice ID cannot exceed 50 characters",
            ));
        }

        if let Some(rate) = self.gst_rate {
            if rate < Decimal::ZERO {
                return Err(AppError::validation("GST rate cannot be negative"));
            }
        }

        if let Some(amount) = self.final_amount {
            if amount < Decimal::ZERO {
                return Err(AppError::validation("Final amount cannot be negative"));
            }
        }

        for item in &self.items {
            item.validate()?;
        }

        Ok(())
    }

    /// GST rate to persist: the submitted rate when GST applies, else zero
    pub fn effective_gst_rate(&self) -> Decimal {
        if self.gst_applied {
            self.gst_rate.unwrap_or_else(|| Decimal::from(18))
        } else {
            Decimal::ZERO
        }
    }

    /// Normalizes items (recomputed amounts, contiguous serials) and
    /// returns them with the authoritative grand total.
    ///
    /// The stored total is always derived from the items when any exist;
    /// the client-supplied figure is only honored for itemless invoices
    /// (a grand total entered directly).
    pub fn normalize(&self) -> (Vec<InvoiceItem>, Decimal) {
        let mut items = self.items.clone();
        for item in &mut items {
            item.recompute_price();
        }
        calculator::renumber(&mut items);

        let final_amount = if items.is_empty() {
            round2(self.final_amount.unwrap_or(Decimal::ZERO))
        } else {
            let totals = calculator::document_totals(
                items.iter().map(|i| i.price),
                self.gst_applied,
                self.effective_gst_rate(),
            );
            round2(totals.total)
        };

        (items, final_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(description: &str, quantity: Decimal, rate: Decimal) -> InvoiceItem {
        InvoiceItem {
            id: None,
            sl_no: 0,
            description: description.to_string(),
            quantity,
            rate,
            price: Decimal::ZERO,
        }
    }

    fn request(items: Vec<InvoiceItem>, gst_applied: bool, gst_rate: Decimal) -> InvoiceRequest {
        InvoiceRequest {
            invoice_id: "INV-001".to_string(),
            customer: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: InvoiceStatus::Pending,
            final_amount: None,
            gst_applied,
            gst_rate: Some(gst_rate),
            notes: None,
            items,
        }
    }

    #[test]
    fn test_normalize_recomputes_total_with_gst() {
        let req = request(vec![item("Rewind", dec!(2), dec!(500))], true, dec!(18));
        let (items, final_amount) = req.normalize();

        assert_eq!(items[0].price, dec!(1000.00));
        assert_eq!(items[0].sl_no, 1);
        // 1000 + 18% GST
        assert_eq!(final_amount, dec!(1180.00));
    }

    #[test]
    fn test_normalize_renumbers_items() {
        let mut first = item("A", dec!(1), dec!(10));
        first.sl_no = 4;
        let mut second = item("B", dec!(1), dec!(20));
        second.sl_no = 9;

        let (items, _) = request(vec![first, second], false, Decimal::ZERO).normalize();
        assert_eq!(items[0].sl_no, 1);
        assert_eq!(items[1].sl_no, 2);
    }

    #[test]
    fn test_normalize_itemless_uses_submitted_total() {
        let mut req = request(vec![], true, dec!(18));
        req.final_amount = Some(dec!(2360));

        let (items, final_amount) = req.normalize();
        assert!(items.is_empty());
        assert_eq!(final_amount, dec!(2360.00));
    }

    #[test]
    fn test_effective_gst_rate() {
        let req = request(vec![], false, dec!(18));
        assert_eq!(req.effective_gst_rate(), Decimal::ZERO);

        let req = request(vec![], true, dec!(12));
        assert_eq!(req.effective_gst_rate(), dec!(12));
    }

    #[test]
    fn test_status_round_trip() {
        use std::str::FromStr;

        for status in [
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ] {
            assert_eq!(
                InvoiceStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
        assert!(InvoiceStatus::from_str("cancelled").is_err());
    }
}

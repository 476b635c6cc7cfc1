use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round2;
use crate::core::{AppError, Result};
use crate::modules::billing::calculator;

use super::quotation_item::QuotationItem;

/// Quotation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl Default for QuotationStatus {
    fn default() -> Self {
        QuotationStatus::Pending
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Pending => write!(f, "pending"),
            QuotationStatus::Accepted => write!(f, "accepted"),
            QuotationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for QuotationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QuotationStatus::Pending),
            "accepted" => Ok(QuotationStatus::Accepted),
            "rejected" => Ok(QuotationStatus::Rejected),
            _ => Err(format!("Invalid quotation status: {}", s)),
        }
    }
}

/// Quotation list row with the customer display name and the derived
/// total resolved
#[derive(Debug, Clone, Serialize)]
pub struct QuotationSummary {
    pub id: i64,
    pub quotation_id: String,
    pub customer: i64,
    pub customer_name: String,
    pub date: NaiveDate,
    pub status: QuotationStatus,
    pub gst_applied: bool,
    pub gst_rate: Decimal,
    pub notes: Option<String>,
    /// Derived from the line items, never stored
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Full quotation with resolved customer contact fields and line items
#[derive(Debug, Clone, Serialize)]
pub struct QuotationDetail {
    pub id: i64,
    pub quotation_id: String,
    pub customer: i64,
    pub customer_name: String,
    pub customer_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_gst: Option<String>,
    pub customer_phone: Option<String>,
    pub date: NaiveDate,
    pub status: QuotationStatus,
    pub gst_applied: bool,
    pub gst_rate: Decimal,
    pub notes: Option<String>,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<QuotationItem>,
}

/// Payload for creating or updating a quotation
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationRequest {
    pub quotation_id: String,
    pub customer: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: QuotationStatus,
    #[serde(default)]
    pub gst_applied: bool,
    #[serde(default)]
    pub gst_rate: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
}

impl QuotationRequest {
    pub fn validate(&self) -> Result<()> {
        if self.quotation_id.trim().is_empty() {
            return Err(AppError::validation("Quotation ID cannot be empty"));
        }

        if self.quotation_id.len() > 50 {
            return Err(AppError::validation(
                "Quotation ID cannot exceed 50 characters",
            ));
        }

        if let Some(rate) = self.gst_rate {
            if rate < Decimal::ZERO {
                return Err(AppError::validation("GST rate cannot be negative"));
            }
        }

        for item in &self.items {
            item.validate()?;
        }

        Ok(())
    }

    pub fn effective_gst_rate(&self) -> Decimal {
        if self.gst_applied {
            self.gst_rate.unwrap_or_else(|| Decimal::from(18))
        } else {
            Decimal::ZERO
        }
    }

    /// Items with serials made contiguous, ready to persist
    pub fn normalize(&self) -> Vec<QuotationItem> {
        let mut items = self.items.clone();
        calculator::renumber(&mut items);
        items
    }
}

/// Grand total for a quotation, always derived from its items
pub fn quotation_total(items: &[QuotationItem], gst_applied: bool, gst_rate: Decimal) -> Decimal {
    let totals = calculator::document_totals(items.iter().map(|i| i.price), gst_applied, gst_rate);
    round2(totals.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(price: Decimal) -> QuotationItem {
        QuotationItem {
            id: None,
            sl_no: 0,
            description: "Rewind".to_string(),
            price,
        }
    }

    #[test]
    fn test_total_with_gst() {
        let items = vec![item(dec!(600)), item(dec!(400))];
        assert_eq!(quotation_total(&items, true, dec!(18)), dec!(1180.00));
    }

    #[test]
    fn test_total_without_gst() {
        let items = vec![item(dec!(600)), item(dec!(400))];
        assert_eq!(quotation_total(&items, false, Decimal::ZERO), dec!(1000.00));
    }

    #[test]
    fn test_normalize_renumbers() {
        let mut a = item(dec!(100));
        a.sl_no = 7;
        let mut b = item(dec!(200));
        b.sl_no = 2;

        let req = QuotationRequest {
            quotation_id: "QTN-001".to_string(),
            customer: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: QuotationStatus::Pending,
            gst_applied: false,
            gst_rate: None,
            notes: None,
            items: vec![a, b],
        };

        let items = req.normalize();
        assert_eq!(items[0].sl_no, 1);
        assert_eq!(items[1].sl_no, 2);
    }

    #[test]
    fn test_status_round_trip() {
        use std::str::FromStr;

        for status in [
            QuotationStatus::Pending,
            QuotationStatus::Accepted,
            QuotationStatus::Rejected,
        ] {
            assert_eq!(
                QuotationStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
        assert!(QuotationStatus::from_str("draft").is_err());
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A received stock entry with the supplier display name resolved.
///
/// Quantity is free-form text ("50 kg", "3 rolls"); only the price takes
/// part in stock value aggregation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IncomingGood {
    pub id: i64,
    pub supplier: i64,
    pub supplier_name: String,
    pub date: NaiveDate,
    pub item_name: String,
    pub quantity: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for recording incoming goods
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingGoodRequest {
    pub supplier: i64,
    pub date: NaiveDate,
    pub item_name: String,
    pub quantity: String,
    pub price: Decimal,
}

impl IncomingGoodRequest {
    pub fn validate(&self) -> Result<()> {
        if self.item_name.trim().is_empty() {
            return Err(AppError::validation("Item name cannot be empty"));
        }

        if self.item_name.len() > 100 {
            return Err(AppError::validation(
                "Item name cannot exceed 100 characters",
            ));
        }

        if self.price < Decimal::ZERO {
            return Err(AppError::validation("Price cannot be negative"));
        }

        Ok(())
    }
}

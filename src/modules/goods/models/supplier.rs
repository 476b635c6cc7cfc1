use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A materials supplier
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub company_name: Option<String>,
    pub gstin: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a supplier
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierRequest {
    pub name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl SupplierRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Supplier name cannot be empty"));
        }

        if self.name.len() > 100 {
            return Err(AppError::validation(
                "Supplier name cannot exceed 100 characters",
            ));
        }

        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A workshop customer. Contact and billing fields beyond the name and
/// phone number are optional.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub gstin: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a customer
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

impl CustomerRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Customer name cannot be empty"));
        }

        if self.phone_number.trim().is_empty() {
            return Err(AppError::validation("Phone number cannot be empty"));
        }

        if self.name.len() > 255 {
            return Err(AppError::validation(
                "Customer name cannot exceed 255 characters",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str) -> CustomerRequest {
        CustomerRequest {
            name: name.to_string(),
            phone_number: phone.to_string(),
            gstin: None,
            address: None,
            email: None,
            company_name: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("ABC Motors", "9876543210").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(request("  ", "9876543210").validate().is_err());
    }

    #[test]
    fn test_empty_phone_rejected() {
        assert!(request("ABC Motors", "").validate().is_err());
    }
}

use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Customer, CustomerRequest};

/// Repository for customer database operations
pub struct CustomerRepository {
    pool: MySqlPool,
}

impl CustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CustomerRequest) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, phone_number, gstin, address, email, company_name)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.phone_number)
        .bind(&request.gstin)
        .bind(&request.address)
        .bind(&request.email)
        .bind(&request.company_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false)
            {
                AppError::validation(format!("Customer '{}' already exists", request.name))
            } else {
                AppError::Database(e)
            }
        })?;

        self.find_by_id(result.last_insert_id() as i64)
            .await?
            .ok_or_else(|| AppError::internal("Created customer not found"))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone_number, gstin, address, email, company_name, created_at
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Customer>> {
        let customers = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT id, name, phone_number, gstin, address, email, company_name, created_at
                    FROM customers
                    WHERE name LIKE ? OR phone_number LIKE ? OR company_name LIKE ?
                    ORDER BY name
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Customer>(
                    r#"
                    SELECT id, name, phone_number, gstin, address, email, company_name, created_at
                    FROM customers
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(customers)
    }

    pub async fn update(&self, id: i64, request: &CustomerRequest) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, phone_number = ?, gstin = ?, address = ?, email = ?, company_name = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.phone_number)
        .bind(&request.gstin)
        .bind(&request.address)
        .bind(&request.email)
        .bind(&request.company_name)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Customer {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))
    }

    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Customer {} not found", id)));
        }

        Ok(())
    }
}

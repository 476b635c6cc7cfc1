use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceDetail, InvoiceItem, InvoiceStatus, InvoiceSummary};

/// Repository for invoice database operations.
///
/// Writes are transactional: an invoice and its line items are persisted
/// or rewritten as a unit.
pub struct InvoiceRepository {
    pool: MySqlPool,
}

impl InvoiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create an invoice with its line items
    pub async fn create(
        &self,
        invoice_id: &str,
        customer: i64,
        date: chrono::NaiveDate,
        status: InvoiceStatus,
        final_amount: Decimal,
        gst_applied: bool,
        gst_rate: Decimal,
        notes: Option<&str>,
        items: &[InvoiceItem],
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO invoices
                (invoice_id, customer_id, date, status, final_amount, gst_applied, gst_rate, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(invoice_id)
        .bind(customer)
        .bind(date)
        .bind(status.to_string())
        .bind(final_amount)
        .bind(gst_applied)
        .bind(gst_rate)
        .bind(notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false)
            {
                AppError::validation(format!("Invoice '{}' already exists", invoice_id))
            } else {
                AppError::Database(e)
            }
        })?;

        let id = result.last_insert_id() as i64;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO invoice_items (invoice_id, sl_no, description, quantity, rate, price)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(item.sl_no)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.rate)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(id)
    }

    /// Find an invoice by id, including customer fields and line items
    pub async fn find_by_id(&self, id: i64) -> Result<Option<InvoiceDetail>> {
        let row = sqlx::query_as::<_, InvoiceDetailRow>(
            r#"
            SELECT
                i.id, i.invoice_id, i.customer_id, c.name AS customer_name,
                c.address AS customer_address, c.email AS customer_email,
                c.gstin AS customer_gst, c.phone_number AS customer_phone,
                i.date, i.status, i.final_amount, i.gst_applied, i.gst_rate,
                i.notes, i.created_at
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
            WHERE i.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows = sqlx::query_as::<_, InvoiceItemRow>(
            r#"
            SELECT id, sl_no, description, quantity, rate, price
            FROM invoice_items
            WHERE invoice_id = ?
            ORDER BY sl_no, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows.into_iter().map(InvoiceItemRow::into_item).collect();

        Ok(Some(row.into_detail(items)?))
    }

    /// List invoices newest first, optionally filtered by invoice id or
    /// customer name
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<InvoiceSummary>> {
        let base = r#"
            SELECT
                i.id, i.invoice_id, i.customer_id, c.name AS customer_name,
                i.date, i.status, i.final_amount, i.gst_applied, i.gst_rate,
                i.notes, i.created_at
            FROM invoices i
            JOIN customers c ON c.id = i.customer_id
        "#;

        let rows = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                let sql = format!(
                    "{} WHERE i.invoice_id LIKE ? OR c.name LIKE ? ORDER BY i.created_at DESC",
                    base
                );
                sqlx::query_as::<_, InvoiceSummaryRow>(&sql)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_all(&self.pool)
                    .await?
            }
            _ => {
                let sql = format!("{} ORDER BY i.created_at DESC", base);
                sqlx::query_as::<_, InvoiceSummaryRow>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(InvoiceSummaryRow::into_summary).collect()
    }

    /// Update an invoice and rewrite its line items.
    ///
    /// Items with a known id belonging to this invoice are updated in
    /// place; ids that do not belong are ignored; id-less items are
    /// inserted; persisted items absent from the submitted list are
    /// deleted.
    pub async fn update(
        &self,
        id: i64,
        customer: i64,
        date: chrono::NaiveDate,
        status: InvoiceStatus,
        final_amount: Decimal,
        gst_applied: bool,
        gst_rate: Decimal,
        notes: Option<&str>,
        items: &[InvoiceItem],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = ?, date = ?, status = ?, final_amount = ?,
                gst_applied = ?, gst_rate = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(customer)
        .bind(date)
        .bind(status.to_string())
        .bind(final_amount)
        .bind(gst_applied)
        .bind(gst_rate)
        .bind(notes)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Invoice {} not found", id)));
        }

        let mut keep_ids: Vec<i64> = Vec::with_capacity(items.len());

        for item in items {
            match item.id {
                Some(item_id) => {
                    let updated = sqlx::query(
                        r#"
                        UPDATE invoice_items
                        SET sl_no = ?, description = ?, quantity = ?, rate = ?, price = ?
                        WHERE id = ? AND invoice_id = ?
                        "#,
                    )
                    .bind(item.sl_no)
                    .bind(&item.description)
                    .bind(item.quantity)
                    .bind(item.rate)
                    .bind(item.price)
                    .bind(item_id)
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                    // Ids not belonging to this invoice are ignored
                    if updated.rows_affected() > 0 {
                        keep_ids.push(item_id);
                    }
                }
                None => {
                    let inserted = sqlx::query(
                        r#"
                        INSERT INTO invoice_items
                            (invoice_id, sl_no, description, quantity, rate, price)
                        VALUES (?, ?, ?, ?, ?, ?)
                        "#,
                    )
                    .bind(id)
                    .bind(item.sl_no)
                    .bind(&item.description)
                    .bind(item.quantity)
                    .bind(item.rate)
                    .bind(item.price)
                    .execute(&mut *tx)
                    .await?;

                    keep_ids.push(inserted.last_insert_id() as i64);
                }
            }
        }

        // Prune items removed from the submitted list
        if keep_ids.is_empty() {
            sqlx::query("DELETE FROM invoice_items WHERE invoice_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        } else {
            let placeholders = vec!["?"; keep_ids.len()].join(", ");
            let sql = format!(
                "DELETE FROM invoice_items WHERE invoice_id = ? AND id NOT IN ({})",
                placeholders
            );
            let mut query = sqlx::query(&sql).bind(id);
            for keep_id in &keep_ids {
                query = query.bind(keep_id);
            }
            query.execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

// Helper structs for database mapping

#[derive(Debug, FromRow)]
struct InvoiceSummaryRow {
    id: i64,
    invoice_id: String,
    customer_id: i64,
    customer_name: String,
    date: chrono::NaiveDate,
    status: String,
    final_amount: Decimal,
    gst_applied: bool,
    gst_rate: Decimal,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl InvoiceSummaryRow {
    fn into_summary(self) -> Result<InvoiceSummary> {
        let status = InvoiceStatus::from_str(&self.status)
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        Ok(InvoiceSummary {
            id: self.id,
            invoice_id: self.invoice_id,
            customer: self.customer_id,
            customer_name: self.customer_name,
            date: self.date,
            status,
            final_amount: self.final_amount,
            gst_applied: self.gst_applied,
            gst_rate: self.gst_rate,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct InvoiceDetailRow {
    id: i64,
    invoice_id: String,
    customer_id: i64,
    customer_name: String,
    customer_address: Option<String>,
    customer_email: Option<String>,
    customer_gst: Option<String>,
    customer_phone: Option<String>,
    date: chrono::NaiveDate,
    status: String,
    final_amount: Decimal,
    gst_applied: bool,
    gst_rate: Decimal,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl InvoiceDetailRow {
    fn into_detail(self, items: Vec<InvoiceItem>) -> Result<InvoiceDetail> {
        let status = InvoiceStatus::from_str(&self.status)
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        Ok(InvoiceDetail {
            id: self.id,
            invoice_id: self.invoice_id,
            customer: self.customer_id,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            customer_email: self.customer_email,
            customer_gst: self.customer_gst,
            customer_phone: self.customer_phone,
            date: self.date,
            status,
            final_amount: self.final_amount,
            gst_applied: self.gst_applied,
            gst_rate: self.gst_rate,
            notes: self.notes,
            created_at: self.created_at,
            items,
        })
    }
}

#[derive(Debug, FromRow)]
struct InvoiceItemRow {
    id: i64,
    sl_no: u32,
    description: String,
    quantity: Decimal,
    rate: Decimal,
    price: Decimal,
}

impl InvoiceItemRow {
    fn into_item(self) -> InvoiceItem {
        InvoiceItem {
            id: Some(self.id),
            sl_no: self.sl_no,
            description: self.description,
            quantity: self.quantity,
            rate: self.rate,
            price: self.price,
        }
    }
}

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::money::round2;
use crate::core::{AppError, Result};
use crate::modules::billing::calculator;
use crate::modules::quotations::models::{
    quotation_total, QuotationDetail, QuotationItem, QuotationStatus, QuotationSummary,
};

/// Repository for quotation database operations.
///
/// Totals are never stored; list queries aggregate item prices and the
/// GST uplift is applied on the way out.
pub struct QuotationRepository {
    pool: MySqlPool,
}

impl QuotationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create a quotation with its line items
    pub async fn create(
        &self,
        quotation_id: &str,
        customer: i64,
        date: chrono::NaiveDate,
        status: QuotationStatus,
        gst_applied: bool,
        gst_rate: Decimal,
        notes: Option<&str>,
        items: &[QuotationItem],
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO quotations
                (quotation_id, customer_id, date, status, gst_applied, gst_rate, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(quotation_id)
        .bind(customer)
        .bind(date)
        .bind(status.to_string())
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
                AppError::validation(format!("Quotation '{}' already exists", quotation_id))
            } else {
                AppError::Database(e)
            }
        })?;

        let id = result.last_insert_id() as i64;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO quotation_items (quotation_id, sl_no, description, price)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(item.sl_no)
            .bind(&item.description)
            .bind(item.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(id)
    }

    /// Find a quotation by id, including customer fields and line items
    pub async fn find_by_id(&self, id: i64) -> Result<Option<QuotationDetail>> {
        let row = sqlx::query_as::<_, QuotationDetailRow>(
            r#"
            SELECT
                q.id, q.quotation_id, q.customer_id, c.name AS customer_name,
                c.address AS customer_address, c.email AS customer_email,
                c.gstin AS customer_gst, c.phone_number AS customer_phone,
                q.date, q.status, q.gst_applied, q.gst_rate, q.notes, q.created_at
            FROM quotations q
            JOIN customers c ON c.id = q.customer_id
            WHERE q.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows = sqlx::query_as::<_, QuotationItemRow>(
            r#"
            SELECT id, sl_no, description, price
            FROM quotation_items
            WHERE quotation_id = ?
            ORDER BY sl_no, id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let items: Vec<QuotationItem> = item_rows
            .into_iter()
            .map(QuotationItemRow::into_item)
            .collect();

        Ok(Some(row.into_detail(items)?))
    }

    /// List quotations newest first, optionally filtered by quotation id
    /// or customer name
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<QuotationSummary>> {
        let base = r#"
            SELECT
                q.id, q.quotation_id, q.customer_id, c.name AS customer_name,
                q.date, q.status, q.gst_applied, q.gst_rate, q.notes, q.created_at,
                COALESCE(SUM(qi.price), 0) AS subtotal
            FROM quotations q
            JOIN customers c ON c.id = q.customer_id
            LEFT JOIN quotation_items qi ON qi.quotation_id = q.id
        "#;
        let tail = "GROUP BY q.id, c.name ORDER BY q.created_at DESC";

        let rows = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                let sql = format!(
                    "{} WHERE q.quotation_id LIKE ? OR c.name LIKE ? {}",
                    base, tail
                );
                sqlx::query_as::<_, QuotationSummaryRow>(&sql)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_all(&self.pool)
                    .await?
            }
            _ => {
                let sql = format!("{} {}", base, tail);
                sqlx::query_as::<_, QuotationSummaryRow>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter()
            .map(QuotationSummaryRow::into_summary)
            .collect()
    }

    /// Update a quotation and rewrite its line items, with the same
    /// keep/insert/delete convention as invoices
    pub async fn update(
        &self,
        id: i64,
        customer: i64,
        date: chrono::NaiveDate,
        status: QuotationStatus,
        gst_applied: bool,
        gst_rate: Decimal,
        notes: Option<&str>,
        items: &[QuotationItem],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE quotations
            SET customer_id = ?, date = ?, status = ?, gst_applied = ?, gst_rate = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(customer)
        .bind(date)
        .bind(status.to_string())
        .bind(gst_applied)
        .bind(gst_rate)
        .bind(notes)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Quotation {} not found", id)));
        }

        let mut keep_ids: Vec<i64> = Vec::with_capacity(items.len());

        for item in items {
            match item.id {
                Some(item_id) => {
                    let updated = sqlx::query(
                        r#"
                        UPDATE quotation_items
                        SET sl_no = ?, description = ?, price = ?
                        WHERE id = ? AND quotation_id = ?
                        "#,
                    )
                    .bind(item.sl_no)
                    .bind(&item.description)
                    .bind(item.price)
                    .bind(item_id)
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                    if updated.rows_affected() > 0 {
                        keep_ids.push(item_id);
                    }
                }
                None => {
                    let inserted = sqlx::query(
                        r#"
                        INSERT INTO quotation_items (quotation_id, sl_no, description, price)
                        VALUES (?, ?, ?, ?)
                        "#,
                    )
                    .bind(id)
                    .bind(item.sl_no)
                    .bind(&item.description)
                    .bind(item.price)
                    .execute(&mut *tx)
                    .await?;

                    keep_ids.push(inserted.last_insert_id() as i64);
                }
            }
        }

        if keep_ids.is_empty() {
            sqlx::query("DELETE FROM quotation_items WHERE quotation_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        } else {
            let placeholders = vec!["?"; keep_ids.len()].join(", ");
            let sql = format!(
                "DELETE FROM quotation_items WHERE quotation_id = ? AND id NOT IN ({})",
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
struct QuotationSummaryRow {
    id: i64,
    quotation_id: String,
    customer_id: i64,
    customer_name: String,
    date: chrono::NaiveDate,
    status: String,
    gst_applied: bool,
    gst_rate: Decimal,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    subtotal: Decimal,
}

impl QuotationSummaryRow {
    fn into_summary(self) -> Result<QuotationSummary> {
        let status = QuotationStatus::from_str(&self.status)
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        let totals = calculator::document_totals(
            std::iter::once(self.subtotal),
            self.gst_applied,
            self.gst_rate,
        );

        Ok(QuotationSummary {
            id: self.id,
            quotation_id: self.quotation_id,
            customer: self.customer_id,
            customer_name: self.customer_name,
            date: self.date,
            status,
            gst_applied: self.gst_applied,
            gst_rate: self.gst_rate,
            notes: self.notes,
            total_amount: round2(totals.total),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct QuotationDetailRow {
    id: i64,
    quotation_id: String,
    customer_id: i64,
    customer_name: String,
    customer_address: Option<String>,
    customer_email: Option<String>,
    customer_gst: Option<String>,
    customer_phone: Option<String>,
    date: chrono::NaiveDate,
    status: String,
    gst_applied: bool,
    gst_rate: Decimal,
    notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl QuotationDetailRow {
    fn into_detail(self, items: Vec<QuotationItem>) -> Result<QuotationDetail> {
        let status = QuotationStatus::from_str(&self.status)
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        let total_amount = quotation_total(&items, self.gst_applied, self.gst_rate);

        Ok(QuotationDetail {
            id: self.id,
            quotation_id: self.quotation_id,
            customer: self.customer_id,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            customer_email: self.customer_email,
            customer_gst: self.customer_gst,
            customer_phone: self.customer_phone,
            date: self.date,
            status,
            gst_applied: self.gst_applied,
            gst_rate: self.gst_rate,
            notes: self.notes,
            total_amount,
            created_at: self.created_at,
            items,
        })
    }
}

#[derive(Debug, FromRow)]
struct QuotationItemRow {
    id: i64,
    sl_no: u32,
    description: String,
    price: Decimal,
}

impl QuotationItemRow {
    fn into_item(self) -> QuotationItem {
        QuotationItem {
            id: Some(self.id),
            sl_no: self.sl_no,
            description: self.description,
            price: self.price,
        }
    }
}

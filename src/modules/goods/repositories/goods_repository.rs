use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::goods::models::{
    IncomingGood, IncomingGoodRequest, Supplier, SupplierRequest,
};

/// Repository for suppliers and incoming stock entries
pub struct GoodsRepository {
    pool: MySqlPool,
}

impl GoodsRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create_supplier(&self, request: &SupplierRequest) -> Result<Supplier> {
        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (name, company_name, gstin, address, phone_number)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.company_name)
        .bind(&request.gstin)
        .bind(&request.address)
        .bind(&request.phone_number)
        .execute(&self.pool)
        .await?;

        self.find_supplier(result.last_insert_id() as i64)
            .await?
            .ok_or_else(|| AppError::internal("Created supplier not found"))
    }

    pub async fn find_supplier(&self, id: i64) -> Result<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, name, company_name, gstin, address, phone_number, created_at
            FROM suppliers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn list_suppliers(&self, search: Option<&str>) -> Result<Vec<Supplier>> {
        let suppliers = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, Supplier>(
                    r#"
                    SELECT id, name, company_name, gstin, address, phone_number, created_at
                    FROM suppliers
                    WHERE name LIKE ? OR company_name LIKE ?
                    ORDER BY name
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, Supplier>(
                    r#"
                    SELECT id, name, company_name, gstin, address, phone_number, created_at
                    FROM suppliers
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(suppliers)
    }

    pub async fn create_incoming_good(
        &self,
        request: &IncomingGoodRequest,
    ) -> Result<IncomingGood> {
        let result = sqlx::query(
            r#"
            INSERT INTO incoming_goods (supplier_id, date, item_name, quantity, price)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.supplier)
        .bind(request.date)
        .bind(&request.item_name)
        .bind(&request.quantity)
        .bind(request.price)
        .execute(&self.pool)
        .await?;

        self.find_incoming_good(result.last_insert_id() as i64)
            .await?
            .ok_or_else(|| AppError::internal("Created stock entry not found"))
    }

    pub async fn find_incoming_good(&self, id: i64) -> Result<Option<IncomingGood>> {
        let good = sqlx::query_as::<_, IncomingGood>(
            r#"
            SELECT g.id, g.supplier_id AS supplier, s.name AS supplier_name,
                   g.date, g.item_name, g.quantity, g.price, g.created_at
            FROM incoming_goods g
            JOIN suppliers s ON s.id = g.supplier_id
            WHERE g.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(good)
    }

    pub async fn list_incoming_goods(&self, search: Option<&str>) -> Result<Vec<IncomingGood>> {
        let goods = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, IncomingGood>(
                    r#"
                    SELECT g.id, g.supplier_id AS supplier, s.name AS supplier_name,
                           g.date, g.item_name, g.quantity, g.price, g.created_at
                    FROM incoming_goods g
                    JOIN suppliers s ON s.id = g.supplier_id
                    WHERE g.item_name LIKE ? OR s.name LIKE ?
                    ORDER BY g.date DESC, g.id DESC
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, IncomingGood>(
                    r#"
                    SELECT g.id, g.supplier_id AS supplier, s.name AS supplier_name,
                           g.date, g.item_name, g.quantity, g.price, g.created_at
                    FROM incoming_goods g
                    JOIN suppliers s ON s.id = g.supplier_id
                    ORDER BY g.date DESC, g.id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(goods)
    }
}

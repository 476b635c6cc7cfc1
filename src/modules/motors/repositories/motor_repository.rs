use std::str::FromStr;

use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::motors::models::{parse_winding_data, Motor, MotorRequest, MotorType};

/// Repository for motor winding specifications.
///
/// The structured winding data is stored as a JSON column; it is
/// validated at the API boundary and parsed leniently on the way out.
pub struct MotorRepository {
    pool: MySqlPool,
}

impl MotorRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &MotorRequest) -> Result<Motor> {
        let winding_json = serde_json::to_string(&request.winding_data)?;

        let result = sqlx::query(
            r#"
            INSERT INTO motors
                (name, description, motor_type, power_rating, voltage, winding_type,
                 coil_count, wire_gauge, pitch_details, turns_per_coil, winding_data,
                 rewinding_notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.motor_type.to_string())
        .bind(&request.power_rating)
        .bind(&request.voltage)
        .bind(&request.winding_type)
        .bind(request.coil_count)
        .bind(&request.wire_gauge)
        .bind(&request.pitch_details)
        .bind(request.turns_per_coil)
        .bind(&winding_json)
        .bind(&request.rewinding_notes)
        .execute(&self.pool)
        .await?;

        self.find_by_id(result.last_insert_id() as i64)
            .await?
            .ok_or_else(|| AppError::internal("Created motor not found"))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Motor>> {
        let row = sqlx::query_as::<_, MotorRow>(
            r#"
            SELECT id, name, description, motor_type, power_rating, voltage,
                   winding_type, coil_count, wire_gauge, pitch_details,
                   turns_per_coil, winding_data, rewinding_notes, created_at
            FROM motors
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MotorRow::into_motor).transpose()
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Motor>> {
        let rows = match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim());
                sqlx::query_as::<_, MotorRow>(
                    r#"
                    SELECT id, name, description, motor_type, power_rating, voltage,
                           winding_type, coil_count, wire_gauge, pitch_details,
                           turns_per_coil, winding_data, rewinding_notes, created_at
                    FROM motors
                    WHERE name LIKE ? OR power_rating LIKE ? OR motor_type LIKE ?
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
                sqlx::query_as::<_, MotorRow>(
                    r#"
                    SELECT id, name, description, motor_type, power_rating, voltage,
                           winding_type, coil_count, wire_gauge, pitch_details,
                           turns_per_coil, winding_data, rewinding_notes, created_at
                    FROM motors
                    ORDER BY name
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(MotorRow::into_motor).collect()
    }

    pub async fn update(&self, id: i64, request: &MotorRequest) -> Result<Motor> {
        let winding_json = serde_json::to_string(&request.winding_data)?;

        let result = sqlx::query(
            r#"
            UPDATE motors
            SET name = ?, description = ?, motor_type = ?, power_rating = ?,
                voltage = ?, winding_type = ?, coil_count = ?, wire_gauge = ?,
                pitch_details = ?, turns_per_coil = ?, winding_data = ?,
                rewinding_notes = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.motor_type.to_string())
        .bind(&request.power_rating)
        .bind(&request.voltage)
        .bind(&request.winding_type)
        .bind(request.coil_count)
        .bind(&request.wire_gauge)
        .bind(&request.pitch_details)
        .bind(request.turns_per_coil)
        .bind(&winding_json)
        .bind(&request.rewinding_notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Motor {} not found", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Motor {} not found", id)))
    }

    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM motors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM motors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Motor {} not found", id)));
        }

        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct MotorRow {
    id: i64,
    name: String,
    description: Option<String>,
    motor_type: String,
    power_rating: Option<String>,
    voltage: Option<String>,
    winding_type: Option<String>,
    coil_count: Option<i32>,
    wire_gauge: Option<String>,
    pitch_details: Option<String>,
    turns_per_coil: Option<i32>,
    winding_data: Option<String>,
    rewinding_notes: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl MotorRow {
    fn into_motor(self) -> Result<Motor> {
        let motor_type = MotorType::from_str(&self.motor_type)
            .map_err(|e| AppError::internal(format!("Invalid motor type in database: {}", e)))?;

        Ok(Motor {
            id: self.id,
            name: self.name,
            description: self.description,
            motor_type,
            power_rating: self.power_rating,
            voltage: self.voltage,
            winding_type: self.winding_type,
            coil_count: self.coil_count,
            wire_gauge: self.wire_gauge,
            pitch_details: self.pitch_details,
            turns_per_coil: self.turns_per_coil,
            winding_data: parse_winding_data(self.winding_data.as_deref()),
            rewinding_notes: self.rewinding_notes,
            created_at: self.created_at,
        })
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fuel::{FuelLog, FuelLogWithContext};
use crate::utils::errors::AppError;

pub struct FuelRepository {
    pool: PgPool,
}

impl FuelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Los fuel logs son input de solo lectura para analytics:
    /// se insertan una vez y no se mutan.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        vehicle_id: Uuid,
        trip_id: Option<Uuid>,
        liters: Decimal,
        cost: Decimal,
        odometer_reading: Option<Decimal>,
        log_date: NaiveDate,
        notes: String,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO fuel_logs
                (id, vehicle_id, trip_id, liters, cost, odometer_reading, log_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(trip_id)
        .bind(liters)
        .bind(cost)
        .bind(odometer_reading)
        .bind(log_date)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn list_with_context(&self) -> Result<Vec<FuelLogWithContext>, AppError> {
        let logs = sqlx::query_as::<_, FuelLogWithContext>(
            r#"
            SELECT f.*, v.name AS vehicle_name, t.origin, t.destination
            FROM fuel_logs f
            LEFT JOIN vehicles v ON f.vehicle_id = v.id
            LEFT JOIN trips t ON f.trip_id = t.id
            ORDER BY f.log_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}

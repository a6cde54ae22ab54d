use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripWithNames};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_draft(
        &self,
        vehicle_id: Uuid,
        driver_id: Uuid,
        origin: String,
        destination: String,
        cargo_weight: Decimal,
        cargo_desc: String,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips
                (id, vehicle_id, driver_id, origin, destination, cargo_weight, cargo_desc, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'Draft', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(origin)
        .bind(destination)
        .bind(cargo_weight)
        .bind(cargo_desc)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// Actualizar un trip que sigue en Draft. La condición de status en el
    /// WHERE protege contra un despacho concurrente entre lectura y escritura.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_draft(
        &self,
        id: Uuid,
        vehicle_id: Uuid,
        driver_id: Uuid,
        origin: String,
        destination: String,
        cargo_weight: Decimal,
        cargo_desc: String,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET vehicle_id = $2, driver_id = $3, origin = $4, destination = $5,
                cargo_weight = $6, cargo_desc = $7
            WHERE id = $1 AND status = 'Draft'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(origin)
        .bind(destination)
        .bind(cargo_weight)
        .bind(cargo_desc)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("trip is no longer in Draft, it was dispatched concurrently".to_string())
        })?;

        Ok(trip)
    }

    pub async fn list_with_names(&self) -> Result<Vec<TripWithNames>, AppError> {
        let trips = sqlx::query_as::<_, TripWithNames>(
            r#"
            SELECT t.*, v.name AS vehicle_name, v.license_plate, d.name AS driver_name
            FROM trips t
            LEFT JOIN vehicles v ON t.vehicle_id = v.id
            LEFT JOIN drivers d ON t.driver_id = d.id
            ORDER BY t.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }
}

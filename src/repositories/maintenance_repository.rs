use sqlx::PgPool;
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceLog, MaintenanceLogWithVehicle};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceLog>, AppError> {
        let log =
            sqlx::query_as::<_, MaintenanceLog>("SELECT * FROM maintenance_logs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(log)
    }

    pub async fn list_with_vehicle(&self) -> Result<Vec<MaintenanceLogWithVehicle>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLogWithVehicle>(
            r#"
            SELECT m.*, v.name AS vehicle_name, v.license_plate
            FROM maintenance_logs m
            LEFT JOIN vehicles v ON m.vehicle_id = v.id
            ORDER BY m.service_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}

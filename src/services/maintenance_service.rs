//! Maintenance Coordinator
//!
//! Máquina paralela Vehicle ⇄ In Shop. Abrir mantenimiento fuerza el
//! vehículo a In Shop sin importar su estado previo (la seguridad pisa la
//! disponibilidad). Cerrarlo solo devuelve el vehículo a Available si
//! sigue In Shop: un cambio concurrente a Out of Service se respeta.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::maintenance::{MaintenanceLog, MaintenanceStatus};
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::{not_found_error, AppError};

pub struct MaintenanceService {
    pool: PgPool,
}

impl MaintenanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Abrir un log de mantenimiento. El alta del log y el paso del
    /// vehículo a In Shop se publican en la misma transacción.
    pub async fn open_maintenance(
        &self,
        actor: &AuthenticatedUser,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceLog, AppError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM vehicles WHERE id = $1")
            .bind(request.vehicle_id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Err(not_found_error("Vehicle", request.vehicle_id));
        }

        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs
                (id, vehicle_id, service_type, description, cost, service_date, mechanic, status, completed_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NULL)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.vehicle_id)
        .bind(request.service_type)
        .bind(request.description.unwrap_or_default())
        .bind(request.cost.unwrap_or_default())
        .bind(request.service_date)
        .bind(request.mechanic.unwrap_or_default())
        .bind(MaintenanceStatus::Open.as_str())
        .fetch_one(&mut *tx)
        .await?;

        // Override de seguridad: In Shop sin importar el estado previo
        sqlx::query("UPDATE vehicles SET status = $1 WHERE id = $2")
            .bind(VehicleStatus::InShop.as_str())
            .bind(request.vehicle_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            "🔧 Maintenance {} opened by {}, vehicle {} marked In Shop",
            log.id, actor.name, log.vehicle_id
        );

        Ok(log)
    }

    /// Cerrar un log de mantenimiento.
    pub async fn complete_maintenance(
        &self,
        actor: &AuthenticatedUser,
        log_id: Uuid,
    ) -> Result<MaintenanceLog, AppError> {
        let mut tx = self.pool.begin().await?;

        let log = sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE id = $1",
        )
        .bind(log_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Maintenance log", log_id))?;

        let completed = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            UPDATE maintenance_logs
            SET status = $2, completed_date = $3
            WHERE id = $1 AND status = $4
            RETURNING *
            "#,
        )
        .bind(log_id)
        .bind(MaintenanceStatus::Completed.as_str())
        .bind(Utc::now().date_naive())
        .bind(MaintenanceStatus::Open.as_str())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::InvalidTransition("maintenance log is already completed".to_string())
        })?;

        // Escritura condicional: solo libera el vehículo si sigue In Shop.
        sqlx::query("UPDATE vehicles SET status = $1 WHERE id = $2 AND status = $3")
            .bind(VehicleStatus::Available.as_str())
            .bind(log.vehicle_id)
            .bind(VehicleStatus::InShop.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            "✅ Maintenance {} completed by {} for vehicle {}",
            log_id, actor.name, log.vehicle_id
        );

        Ok(completed)
    }
}

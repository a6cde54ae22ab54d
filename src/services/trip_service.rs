//! Trip Lifecycle Engine
//!
//! Este módulo gobierna el ciclo de vida de un trip y los efectos que cada
//! transición aplica sobre el vehículo y el driver asociados. Toda
//! transición ejecuta como una unidad atómica: o se publican las tres
//! escrituras (trip, vehicle, driver) o ninguna es visible.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::trip_dto::{CreateTripRequest, TripResponse, TripStatusRequest, UpdateTripRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::driver::DriverStatus;
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::validate_cargo_weight;

/// Política del odómetro al cierre de un trip. Permisiva: el valor
/// reportado se escribe tal cual, incluso si es menor que el almacenado.
/// Aislada acá para poder endurecerla sin tocar la máquina de estados.
fn final_odometer_value(_current: Decimal, reported: Option<Decimal>) -> Option<Decimal> {
    reported
}

pub struct TripService {
    pool: PgPool,
}

impl TripService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un trip en Draft. Un Draft no reserva recursos: el vehículo y
    /// el driver no cambian de estado hasta el despacho.
    pub async fn create_trip(
        &self,
        actor: &AuthenticatedUser,
        request: CreateTripRequest,
    ) -> Result<TripResponse, AppError> {
        let vehicles = VehicleRepository::new(self.pool.clone());
        let drivers = DriverRepository::new(self.pool.clone());

        let vehicle = vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        if !vehicle.is_available() {
            return Err(AppError::Validation(format!(
                "Vehicle '{}' is not available (status: {})",
                vehicle.name, vehicle.status
            )));
        }

        let driver = drivers
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", request.driver_id))?;

        if driver.is_suspended() {
            return Err(AppError::Validation(format!(
                "Driver '{}' is suspended and cannot be assigned to a trip",
                driver.name
            )));
        }

        validate_cargo_weight(request.cargo_weight, vehicle.max_capacity)?;

        let trip = TripRepository::new(self.pool.clone())
            .insert_draft(
                request.vehicle_id,
                request.driver_id,
                request.origin,
                request.destination,
                request.cargo_weight,
                request.cargo_desc.unwrap_or_default(),
            )
            .await?;

        let license_warning = driver.license_expired(Utc::now().date_naive());
        if license_warning {
            warn!(
                "⚠️ Driver '{}' has an expired license ({}), trip {} created anyway",
                driver.name, driver.license_expiry, trip.id
            );
        }

        info!("🚚 Trip {} created in Draft by {}", trip.id, actor.name);

        Ok(TripResponse {
            trip,
            license_warning,
        })
    }

    /// Editar un trip. Solo los trips en Draft son editables; el validador
    /// de capacidad corre de nuevo contra el vehículo (posiblemente nuevo).
    pub async fn edit_trip(
        &self,
        actor: &AuthenticatedUser,
        trip_id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<TripResponse, AppError> {
        let trips = TripRepository::new(self.pool.clone());
        let vehicles = VehicleRepository::new(self.pool.clone());
        let drivers = DriverRepository::new(self.pool.clone());

        let trip = trips
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| not_found_error("Trip", trip_id))?;

        if trip.status != TripStatus::Draft.as_str() {
            return Err(AppError::InvalidTransition(
                "only Draft trips can be edited".to_string(),
            ));
        }

        let vehicle = vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        let driver = drivers
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("Driver", request.driver_id))?;

        if driver.is_suspended() {
            return Err(AppError::Validation(format!(
                "Driver '{}' is suspended and cannot be assigned to a trip",
                driver.name
            )));
        }

        validate_cargo_weight(request.cargo_weight, vehicle.max_capacity)?;

        let updated = trips
            .update_draft(
                trip_id,
                request.vehicle_id,
                request.driver_id,
                request.origin,
                request.destination,
                request.cargo_weight,
                request.cargo_desc.unwrap_or_default(),
            )
            .await?;

        let license_warning = driver.license_expired(Utc::now().date_naive());

        info!("✏️ Trip {} updated while in Draft by {}", trip_id, actor.name);

        Ok(TripResponse {
            trip: updated,
            license_warning,
        })
    }

    /// Aplicar una transición de estado con sus efectos cross-entity.
    ///
    /// La legalidad del par (from, to) la decide la tabla explícita de
    /// `TripStatus`; el UPDATE condicionado al estado leído hace de check
    /// optimista: una transición duplicada concurrente afecta 0 filas y
    /// falla con Conflict en vez de duplicar efectos.
    pub async fn transition_trip(
        &self,
        actor: &AuthenticatedUser,
        trip_id: Uuid,
        request: TripStatusRequest,
    ) -> Result<Trip, AppError> {
        let target = TripStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown trip status '{}'", request.status))
        })?;

        let mut tx = self.pool.begin().await?;

        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(trip_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Trip", trip_id))?;

        let from = TripStatus::parse(&trip.status).ok_or_else(|| {
            AppError::Internal(format!(
                "trip {} has unknown status '{}'",
                trip.id, trip.status
            ))
        })?;

        if !from.can_transition_to(target) {
            return Err(AppError::InvalidTransition(format!(
                "cannot move trip from {} to {}",
                from.as_str(),
                target.as_str()
            )));
        }

        let updated = sqlx::query("UPDATE trips SET status = $1 WHERE id = $2 AND status = $3")
            .bind(target.as_str())
            .bind(trip_id)
            .bind(from.as_str())
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "trip {} was transitioned concurrently",
                trip_id
            )));
        }

        match (from, target) {
            (TripStatus::Draft, TripStatus::Dispatched) => {
                set_vehicle_status(&mut tx, trip.vehicle_id, VehicleStatus::OnTrip).await?;
                set_driver_status(&mut tx, trip.driver_id, DriverStatus::OnDuty).await?;
            }
            (TripStatus::Dispatched, TripStatus::Completed)
            | (TripStatus::Dispatched, TripStatus::Cancelled) => {
                let current_odometer: Decimal =
                    sqlx::query_scalar("SELECT odometer FROM vehicles WHERE id = $1")
                        .bind(trip.vehicle_id)
                        .fetch_optional(&mut *tx)
                        .await?
                        .ok_or_else(|| not_found_error("Vehicle", trip.vehicle_id))?;

                if let Some(value) = final_odometer_value(current_odometer, request.final_odometer)
                {
                    sqlx::query("UPDATE vehicles SET odometer = $1 WHERE id = $2")
                        .bind(value)
                        .bind(trip.vehicle_id)
                        .execute(&mut *tx)
                        .await?;
                }

                set_vehicle_status(&mut tx, trip.vehicle_id, VehicleStatus::Available).await?;
                set_driver_status(&mut tx, trip.driver_id, DriverStatus::OnDuty).await?;

                if target == TripStatus::Completed {
                    let result = sqlx::query(
                        "UPDATE drivers SET trips_completed = trips_completed + 1 WHERE id = $1",
                    )
                    .bind(trip.driver_id)
                    .execute(&mut *tx)
                    .await?;

                    if result.rows_affected() == 0 {
                        return Err(not_found_error("Driver", trip.driver_id));
                    }
                }
            }
            (TripStatus::Draft, TripStatus::Cancelled) => {
                // Un Draft nunca reservó recursos: no hay nada que liberar.
            }
            _ => {
                return Err(AppError::Internal(format!(
                    "no side effects defined for {} -> {}",
                    from.as_str(),
                    target.as_str()
                )));
            }
        }

        tx.commit().await?;

        info!(
            "✅ Trip {} transitioned {} -> {} by {}",
            trip_id,
            from.as_str(),
            target.as_str(),
            actor.name
        );

        Ok(Trip {
            status: target.as_str().to_string(),
            ..trip
        })
    }
}

async fn set_vehicle_status(
    conn: &mut PgConnection,
    id: Uuid,
    status: VehicleStatus,
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE vehicles SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found_error("Vehicle", id));
    }

    Ok(())
}

async fn set_driver_status(
    conn: &mut PgConnection,
    id: Uuid,
    status: DriverStatus,
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE drivers SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found_error("Driver", id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_final_odometer_policy_writes_reported_value() {
        assert_eq!(
            final_odometer_value(dec("5000"), Some(dec("5400"))),
            Some(dec("5400"))
        );
    }

    #[test]
    fn test_final_odometer_policy_accepts_backward_jump() {
        // comportamiento permisivo documentado: no hay check de monotonía
        assert_eq!(
            final_odometer_value(dec("5000"), Some(dec("4000"))),
            Some(dec("4000"))
        );
    }

    #[test]
    fn test_final_odometer_policy_skips_when_absent() {
        assert_eq!(final_odometer_value(dec("5000"), None), None);
    }
}

//! Modelo de FuelLog
//!
//! Input de solo lectura para analytics; nunca se muta después del insert.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// FuelLog - mapea exactamente a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub liters: Decimal,
    pub cost: Decimal,
    pub odometer_reading: Option<Decimal>,
    pub log_date: NaiveDate,
    pub notes: String,
}

/// Log de combustible con contexto de vehículo y trip (vista de listado)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FuelLogWithContext {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub liters: Decimal,
    pub cost: Decimal,
    pub odometer_reading: Option<Decimal>,
    pub log_date: NaiveDate,
    pub notes: String,
    pub vehicle_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

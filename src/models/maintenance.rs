//! Modelo de MaintenanceLog
//!
//! Mientras un log de mantenimiento está Open, el vehículo referenciado
//! debe estar "In Shop".

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Open,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Open" => Some(MaintenanceStatus::Open),
            "Completed" => Some(MaintenanceStatus::Completed),
            _ => None,
        }
    }
}

/// MaintenanceLog - mapea exactamente a la tabla maintenance_logs
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type: String,
    pub description: String,
    pub cost: Decimal,
    pub service_date: NaiveDate,
    pub mechanic: String,
    pub status: String,
    pub completed_date: Option<NaiveDate>,
}

/// Log con el nombre del vehículo asociado (vista de listado)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceLogWithVehicle {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_type: String,
    pub description: String,
    pub cost: Decimal,
    pub service_date: NaiveDate,
    pub mechanic: String,
    pub status: String,
    pub completed_date: Option<NaiveDate>,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
}

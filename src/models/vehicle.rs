//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus estados. Mapea exactamente
//! a la tabla `vehicles` con los valores de estado originales del schema.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del vehículo. Se persiste como TEXT con los valores de display
/// originales para compatibilidad drop-in con datos existentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InShop,
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On Trip",
            VehicleStatus::InShop => "In Shop",
            VehicleStatus::OutOfService => "Out of Service",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(VehicleStatus::Available),
            "On Trip" => Some(VehicleStatus::OnTrip),
            "In Shop" => Some(VehicleStatus::InShop),
            "Out of Service" => Some(VehicleStatus::OutOfService),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub max_capacity: Decimal,
    pub odometer: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available.as_str()
    }

    pub fn is_out_of_service(&self) -> bool {
        self.status == VehicleStatus::OutOfService.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            VehicleStatus::Available,
            VehicleStatus::OnTrip,
            VehicleStatus::InShop,
            VehicleStatus::OutOfService,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(VehicleStatus::parse("Scrapped"), None);
    }
}

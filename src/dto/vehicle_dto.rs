use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: String,

    #[validate(custom = "crate::utils::validation::validate_positive_decimal")]
    pub max_capacity: Decimal,

    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub odometer: Option<Decimal>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_positive_decimal")]
    pub max_capacity: Option<Decimal>,

    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub odometer: Option<Decimal>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
}

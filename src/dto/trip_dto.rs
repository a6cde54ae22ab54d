use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::Trip;

/// Request para crear un trip (queda en Draft)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub origin: String,

    #[validate(length(min = 1, max = 200))]
    pub destination: String,

    #[validate(custom = "crate::utils::validation::validate_positive_decimal")]
    pub cargo_weight: Decimal,

    pub cargo_desc: Option<String>,
}

/// Request para editar un trip en Draft (mismos campos que el alta)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub origin: String,

    #[validate(length(min = 1, max = 200))]
    pub destination: String,

    #[validate(custom = "crate::utils::validation::validate_positive_decimal")]
    pub cargo_weight: Decimal,

    pub cargo_desc: Option<String>,
}

/// Request de transición de estado del trip
#[derive(Debug, Deserialize, Validate)]
pub struct TripStatusRequest {
    pub status: String,

    /// Solo relevante al cerrar (Completed/Cancelled)
    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub final_odometer: Option<Decimal>,
}

/// Response de trip con el warning de licencia vencida.
/// El warning informa, nunca bloquea.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub trip: Trip,
    pub license_warning: bool,
}

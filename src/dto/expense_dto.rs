use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para registrar un fuel log
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: Uuid,

    pub trip_id: Option<Uuid>,

    #[validate(custom = "crate::utils::validation::validate_positive_decimal")]
    pub liters: Decimal,

    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub cost: Decimal,

    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub odometer_reading: Option<Decimal>,

    pub log_date: NaiveDate,

    pub notes: Option<String>,
}

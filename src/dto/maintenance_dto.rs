use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para abrir un log de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub service_type: String,

    pub description: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_non_negative_decimal")]
    pub cost: Option<Decimal>,

    pub service_date: NaiveDate,

    pub mechanic: Option<String>,
}

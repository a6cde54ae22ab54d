use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Request para crear un driver
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub email: Option<String>,
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub license_number: String,

    pub license_expiry: NaiveDate,

    pub vehicle_category: Option<String>,
}

/// Request para actualizar un driver existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub email: Option<String>,
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub license_number: Option<String>,

    pub license_expiry: Option<NaiveDate>,

    pub vehicle_category: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub safety_score: Option<i32>,
}

/// Request para cambiar el estado de un driver
#[derive(Debug, Deserialize)]
pub struct DriverStatusRequest {
    pub status: String,
}

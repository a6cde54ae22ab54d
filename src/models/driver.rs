//! Modelo de Driver
//!
//! Mapea a la tabla `drivers`. Un driver Suspended nunca puede asignarse a
//! un trip nuevo; una licencia vencida solo genera un warning no bloqueante.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del driver - se persiste como TEXT con los valores originales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    OnDuty,
    OffDuty,
    Suspended,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::OnDuty => "On Duty",
            DriverStatus::OffDuty => "Off Duty",
            DriverStatus::Suspended => "Suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "On Duty" => Some(DriverStatus::OnDuty),
            "Off Duty" => Some(DriverStatus::OffDuty),
            "Suspended" => Some(DriverStatus::Suspended),
            _ => None,
        }
    }
}

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub vehicle_category: String,
    pub status: String,
    pub trips_completed: i32,
    pub safety_score: i32,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn is_suspended(&self) -> bool {
        self.status == DriverStatus::Suspended.as_str()
    }

    /// Warning-only: una licencia vencida no bloquea la asignación,
    /// se informa al caller.
    pub fn license_expired(&self, today: NaiveDate) -> bool {
        self.license_expiry < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(status: &str, expiry: &str) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            name: "Amadou Diallo".to_string(),
            email: String::new(),
            phone: String::new(),
            license_number: "D-4471".to_string(),
            license_expiry: expiry.parse().unwrap(),
            vehicle_category: "Any".to_string(),
            status: status.to_string(),
            trips_completed: 0,
            safety_score: 100,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_suspended_flag() {
        assert!(driver("Suspended", "2030-01-01").is_suspended());
        assert!(!driver("On Duty", "2030-01-01").is_suspended());
    }

    #[test]
    fn test_license_expired_is_warning_only() {
        let today: NaiveDate = "2026-08-06".parse().unwrap();
        assert!(driver("On Duty", "2026-08-05").license_expired(today));
        assert!(!driver("On Duty", "2026-08-06").license_expired(today));
    }
}

//! Modelo de Trip y su máquina de estados
//!
//! Este módulo contiene el struct Trip y la tabla explícita de transiciones
//! legales del ciclo de vida. Cualquier par (from, to) fuera de la tabla se
//! rechaza con InvalidTransition en lugar de aplicar efectos a ciegas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del trip. Draft es inicial; Completed y Cancelled son terminales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "Draft",
            TripStatus::Dispatched => "Dispatched",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Draft" => Some(TripStatus::Draft),
            "Dispatched" => Some(TripStatus::Dispatched),
            "Completed" => Some(TripStatus::Completed),
            "Cancelled" => Some(TripStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }

    /// Tabla de transiciones legales. Draft -> Completed queda prohibido:
    /// completar un trip nunca despachado inflaría trips_completed.
    /// Draft -> Cancelled se permite (abandonar un borrador no libera
    /// recursos porque nunca los reservó).
    pub fn can_transition_to(&self, target: TripStatus) -> bool {
        matches!(
            (self, target),
            (TripStatus::Draft, TripStatus::Dispatched)
                | (TripStatus::Draft, TripStatus::Cancelled)
                | (TripStatus::Dispatched, TripStatus::Completed)
                | (TripStatus::Dispatched, TripStatus::Cancelled)
        )
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: Decimal,
    pub cargo_desc: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Trip con los nombres del vehículo y driver asociados (vista de listado)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TripWithNames {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub cargo_weight: Decimal,
    pub cargo_desc: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
    pub driver_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert!(TripStatus::Draft.can_transition_to(TripStatus::Dispatched));
        assert!(TripStatus::Draft.can_transition_to(TripStatus::Cancelled));
        assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Completed));
        assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Cancelled));
    }

    #[test]
    fn test_draft_cannot_skip_dispatch() {
        assert!(!TripStatus::Draft.can_transition_to(TripStatus::Completed));
    }

    #[test]
    fn test_no_way_back_to_draft() {
        assert!(!TripStatus::Dispatched.can_transition_to(TripStatus::Draft));
        assert!(!TripStatus::Completed.can_transition_to(TripStatus::Draft));
        assert!(!TripStatus::Cancelled.can_transition_to(TripStatus::Draft));
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for terminal in [TripStatus::Completed, TripStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for target in [
                TripStatus::Draft,
                TripStatus::Dispatched,
                TripStatus::Completed,
                TripStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_self_transitions_rejected() {
        for status in [TripStatus::Draft, TripStatus::Dispatched] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for status in [
            TripStatus::Draft,
            TripStatus::Dispatched,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ] {
            assert_eq!(TripStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TripStatus::parse("InProgress"), None);
    }
}

//! Modelo de User y matriz de capacidades por rol
//!
//! Los roles son una enumeración tipada y los permisos de escritura una
//! matriz estática chequeada en la capa de rutas, fuera del core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol del usuario - se persiste como TEXT con los valores originales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Dispatcher,
    SafetyOfficer,
    FinancialAnalyst,
}

/// Módulos del sistema sobre los que se controla la escritura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Vehicles,
    Trips,
    Drivers,
    Maintenance,
    Expenses,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Dispatcher => "Dispatcher",
            Role::SafetyOfficer => "Safety Officer",
            Role::FinancialAnalyst => "Financial Analyst",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Manager" => Some(Role::Manager),
            "Dispatcher" => Some(Role::Dispatcher),
            "Safety Officer" => Some(Role::SafetyOfficer),
            "Financial Analyst" => Some(Role::FinancialAnalyst),
            _ => None,
        }
    }

    /// Matriz estática de permisos de escritura por módulo
    pub fn can_write(&self, module: Module) -> bool {
        match module {
            Module::Vehicles => matches!(self, Role::Manager),
            Module::Trips => matches!(self, Role::Manager | Role::Dispatcher),
            Module::Drivers => matches!(self, Role::Manager | Role::SafetyOfficer),
            Module::Maintenance => matches!(self, Role::Manager | Role::FinancialAnalyst),
            Module::Expenses => matches!(self, Role::Manager | Role::FinancialAnalyst),
        }
    }
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Vehicles => "vehicles",
            Module::Trips => "trips",
            Module::Drivers => "drivers",
            Module::Maintenance => "maintenance",
            Module::Expenses => "expenses",
        }
    }
}

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_writes_everywhere() {
        for module in [
            Module::Vehicles,
            Module::Trips,
            Module::Drivers,
            Module::Maintenance,
            Module::Expenses,
        ] {
            assert!(Role::Manager.can_write(module));
        }
    }

    #[test]
    fn test_dispatcher_only_writes_trips() {
        assert!(Role::Dispatcher.can_write(Module::Trips));
        assert!(!Role::Dispatcher.can_write(Module::Vehicles));
        assert!(!Role::Dispatcher.can_write(Module::Drivers));
        assert!(!Role::Dispatcher.can_write(Module::Maintenance));
        assert!(!Role::Dispatcher.can_write(Module::Expenses));
    }

    #[test]
    fn test_safety_officer_writes_drivers() {
        assert!(Role::SafetyOfficer.can_write(Module::Drivers));
        assert!(!Role::SafetyOfficer.can_write(Module::Trips));
        assert!(!Role::SafetyOfficer.can_write(Module::Vehicles));
    }

    #[test]
    fn test_financial_analyst_writes_costs() {
        assert!(Role::FinancialAnalyst.can_write(Module::Maintenance));
        assert!(Role::FinancialAnalyst.can_write(Module::Expenses));
        assert!(!Role::FinancialAnalyst.can_write(Module::Trips));
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in [
            Role::Manager,
            Role::Dispatcher,
            Role::SafetyOfficer,
            Role::FinancialAnalyst,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Admin"), None);
    }
}

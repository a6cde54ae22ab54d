//! Modelos de Analytics
//!
//! Este módulo contiene los modelos derivados para el reporte de flota
//! y el resumen del dashboard. Todos son de solo lectura.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Agregados de combustible por vehículo, tal como salen del store
#[derive(Debug, Clone, FromRow)]
pub struct FuelAggregates {
    pub vehicle_id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub current_odometer: Decimal,
    pub total_liters: Option<Decimal>,
    pub total_fuel_cost: Option<Decimal>,
    pub max_odometer: Option<Decimal>,
    pub min_odometer: Option<Decimal>,
    pub log_count: i64,
}

/// Fila de eficiencia de combustible derivada.
/// `efficiency` es None cuando no hay datos suficientes (sentinel "no data").
#[derive(Debug, Clone, Serialize)]
pub struct FuelEconomyRow {
    pub vehicle_id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub current_odometer: Decimal,
    pub total_liters: Decimal,
    pub total_fuel_cost: Decimal,
    pub log_count: i64,
    pub km_driven: Decimal,
    pub efficiency: Option<Decimal>,
}

/// Costos totales por vehículo (combustible + mantenimiento)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleCostRow {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub fuel_cost: Decimal,
    pub maintenance_cost: Decimal,
    #[sqlx(default)]
    pub total_cost: Decimal,
}

/// Conteo de trips agrupado por estado
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TripStatusCount {
    pub status: String,
    pub count: i64,
}

/// Costo mensual de combustible (YYYY-MM)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyFuelCost {
    pub month: String,
    pub cost: Decimal,
}

/// Ranking de drivers por trips completados
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DriverPerformanceRow {
    pub name: String,
    pub trips_completed: i32,
    pub safety_score: i32,
}

/// Reporte completo de analytics de la flota
#[derive(Debug, Clone, Serialize)]
pub struct FleetAnalytics {
    pub fuel_economy: Vec<FuelEconomyRow>,
    pub vehicle_costs: Vec<VehicleCostRow>,
    pub trip_stats: Vec<TripStatusCount>,
    pub monthly_fuel: Vec<MonthlyFuelCost>,
    pub driver_performance: Vec<DriverPerformanceRow>,
}

/// Alerta de licencia por vencer (dentro de 30 días)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LicenseAlert {
    pub name: String,
    pub license_expiry: NaiveDate,
}

/// Trip reciente para el dashboard
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RecentTrip {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
    pub driver_name: Option<String>,
}

/// Resumen del dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub active_fleet: i64,
    pub maintenance_alerts: i64,
    pub utilization: f64,
    pub pending_cargo: i64,
    pub available_vehicles: i64,
    pub on_duty_drivers: i64,
    pub license_alerts: Vec<LicenseAlert>,
    pub recent_trips: Vec<RecentTrip>,
}

//! Analytics Aggregator
//!
//! Deriva eficiencia de combustible, rollups de costos y estadísticas de
//! flota a partir de los logs almacenados. Solo lee el Entity Store.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::analytics::{
    DashboardSummary, DriverPerformanceRow, FleetAnalytics, FuelAggregates, FuelEconomyRow,
    LicenseAlert, MonthlyFuelCost, RecentTrip, TripStatusCount, VehicleCostRow,
};
use crate::models::driver::DriverStatus;
use crate::models::trip::TripStatus;
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::AppError;

/// Resultado de la derivación de eficiencia para un vehículo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelEfficiency {
    pub km_driven: Decimal,
    pub efficiency: Option<Decimal>,
}

/// Cadena de fallback para derivar km recorridos y eficiencia.
///
/// El orden de las ramas es contractual: el rango de lecturas de odómetro
/// (2) siempre gana sobre el odómetro actual del vehículo (3 y 4). La
/// rama 4 trata el odómetro de vida como distancia, un fallback
/// deliberadamente impreciso para datos escasos.
pub fn derive_fuel_efficiency(
    total_liters: Decimal,
    max_odometer: Option<Decimal>,
    min_odometer: Option<Decimal>,
    current_odometer: Decimal,
) -> FuelEfficiency {
    if total_liters <= Decimal::ZERO {
        return FuelEfficiency {
            km_driven: Decimal::ZERO,
            efficiency: None,
        };
    }

    let km = match (max_odometer, min_odometer) {
        (Some(max), Some(min)) if max > min => max - min,
        (_, Some(min)) if current_odometer > min => current_odometer - min,
        _ if current_odometer > Decimal::ZERO => current_odometer,
        _ => {
            return FuelEfficiency {
                km_driven: Decimal::ZERO,
                efficiency: None,
            }
        }
    };

    FuelEfficiency {
        km_driven: km.round_dp(1),
        efficiency: Some((km / total_liters).round_dp(2)),
    }
}

pub struct AnalyticsService {
    pool: PgPool,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reporte completo de la flota
    pub async fn fleet_analytics(&self) -> Result<FleetAnalytics, AppError> {
        let aggregates = sqlx::query_as::<_, FuelAggregates>(
            r#"
            SELECT v.id AS vehicle_id, v.name, v.license_plate, v.odometer AS current_odometer,
                   SUM(f.liters) AS total_liters,
                   SUM(f.cost) AS total_fuel_cost,
                   MAX(f.odometer_reading) AS max_odometer,
                   MIN(f.odometer_reading) AS min_odometer,
                   COUNT(f.id) AS log_count
            FROM fuel_logs f
            JOIN vehicles v ON f.vehicle_id = v.id
            GROUP BY v.id, v.name, v.license_plate, v.odometer
            ORDER BY v.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let fuel_economy = aggregates
            .into_iter()
            .map(|agg| {
                let total_liters = agg.total_liters.unwrap_or_default();
                let derived = derive_fuel_efficiency(
                    total_liters,
                    agg.max_odometer,
                    agg.min_odometer,
                    agg.current_odometer,
                );
                FuelEconomyRow {
                    vehicle_id: agg.vehicle_id,
                    name: agg.name,
                    license_plate: agg.license_plate,
                    current_odometer: agg.current_odometer,
                    total_liters,
                    total_fuel_cost: agg.total_fuel_cost.unwrap_or_default(),
                    log_count: agg.log_count,
                    km_driven: derived.km_driven,
                    efficiency: derived.efficiency,
                }
            })
            .collect();

        let mut vehicle_costs = sqlx::query_as::<_, VehicleCostRow>(
            r#"
            SELECT v.id, v.name, v.license_plate,
                   COALESCE((SELECT SUM(f.cost) FROM fuel_logs f WHERE f.vehicle_id = v.id), 0) AS fuel_cost,
                   COALESCE((SELECT SUM(m.cost) FROM maintenance_logs m WHERE m.vehicle_id = v.id), 0) AS maintenance_cost
            FROM vehicles v
            ORDER BY v.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        for row in &mut vehicle_costs {
            row.total_cost = row.fuel_cost + row.maintenance_cost;
        }

        let trip_stats = sqlx::query_as::<_, TripStatusCount>(
            "SELECT status, COUNT(*) AS count FROM trips GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        let monthly_fuel = sqlx::query_as::<_, MonthlyFuelCost>(
            r#"
            SELECT to_char(log_date, 'YYYY-MM') AS month, SUM(cost) AS cost
            FROM fuel_logs
            GROUP BY month
            ORDER BY month DESC
            LIMIT 12
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let driver_performance = sqlx::query_as::<_, DriverPerformanceRow>(
            "SELECT name, trips_completed, safety_score FROM drivers ORDER BY trips_completed DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(FleetAnalytics {
            fuel_economy,
            vehicle_costs,
            trip_stats,
            monthly_fuel,
            driver_performance,
        })
    }

    /// Resumen del dashboard
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        let active_fleet = self
            .count_vehicles_with_status(VehicleStatus::OnTrip.as_str())
            .await?;
        let maintenance_alerts = self
            .count_vehicles_with_status(VehicleStatus::InShop.as_str())
            .await?;
        let available_vehicles = self
            .count_vehicles_with_status(VehicleStatus::Available.as_str())
            .await?;

        let total_fleet: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE status <> $1")
                .bind(VehicleStatus::OutOfService.as_str())
                .fetch_one(&self.pool)
                .await?;

        let utilization = if total_fleet > 0 {
            (active_fleet as f64 / total_fleet as f64 * 100.0 * 10.0).round() / 10.0
        } else {
            0.0
        };

        let pending_cargo: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trips WHERE status = $1")
            .bind(TripStatus::Draft.as_str())
            .fetch_one(&self.pool)
            .await?;

        let on_duty_drivers: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM drivers WHERE status = $1")
                .bind(DriverStatus::OnDuty.as_str())
                .fetch_one(&self.pool)
                .await?;

        let license_alerts = sqlx::query_as::<_, LicenseAlert>(
            r#"
            SELECT name, license_expiry FROM drivers
            WHERE license_expiry <= CURRENT_DATE + INTERVAL '30 days'
              AND license_expiry >= CURRENT_DATE
            ORDER BY license_expiry
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let recent_trips = sqlx::query_as::<_, RecentTrip>(
            r#"
            SELECT t.id, t.origin, t.destination, t.status, t.created_at,
                   v.name AS vehicle_name, d.name AS driver_name
            FROM trips t
            LEFT JOIN vehicles v ON t.vehicle_id = v.id
            LEFT JOIN drivers d ON t.driver_id = d.id
            ORDER BY t.created_at DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardSummary {
            active_fleet,
            maintenance_alerts,
            utilization,
            pending_cargo,
            available_vehicles,
            on_duty_drivers,
            license_alerts,
            recent_trips,
        })
    }

    async fn count_vehicles_with_status(&self, status: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_reading_range_wins() {
        let result = derive_fuel_efficiency(dec("50"), Some(dec("1000")), Some(dec("500")), dec("0"));
        assert_eq!(result.km_driven, dec("500"));
        assert_eq!(result.efficiency, Some(dec("10")));
    }

    #[test]
    fn test_no_liters_means_no_data() {
        let result =
            derive_fuel_efficiency(dec("0"), Some(dec("1000")), Some(dec("500")), dec("9999"));
        assert_eq!(result.km_driven, Decimal::ZERO);
        assert_eq!(result.efficiency, None);

        let negative = derive_fuel_efficiency(dec("-3"), None, None, dec("100"));
        assert_eq!(negative.efficiency, None);
    }

    #[test]
    fn test_lifetime_odometer_fallback() {
        let result = derive_fuel_efficiency(dec("20"), None, None, dec("300"));
        assert_eq!(result.km_driven, dec("300"));
        assert_eq!(result.efficiency, Some(dec("15")));
    }

    #[test]
    fn test_range_preferred_over_current_odometer() {
        // rama 2 gana aunque las ramas 3 y 4 también aplicarían
        let result =
            derive_fuel_efficiency(dec("10"), Some(dec("800")), Some(dec("600")), dec("10000"));
        assert_eq!(result.km_driven, dec("200"));
        assert_eq!(result.efficiency, Some(dec("20")));
    }

    #[test]
    fn test_current_minus_min_when_range_unusable() {
        let result = derive_fuel_efficiency(dec("10"), None, Some(dec("100")), dec("300"));
        assert_eq!(result.km_driven, dec("200"));
        assert_eq!(result.efficiency, Some(dec("20")));
    }

    #[test]
    fn test_current_below_min_falls_to_lifetime() {
        let result = derive_fuel_efficiency(dec("10"), None, Some(dec("400")), dec("300"));
        assert_eq!(result.km_driven, dec("300"));
        assert_eq!(result.efficiency, Some(dec("30")));
    }

    #[test]
    fn test_equal_readings_fall_through() {
        // max == min no define rango; cae al odómetro actual
        let result =
            derive_fuel_efficiency(dec("10"), Some(dec("500")), Some(dec("500")), dec("700"));
        assert_eq!(result.km_driven, dec("200"));
        assert_eq!(result.efficiency, Some(dec("20")));
    }

    #[test]
    fn test_no_usable_odometer_data() {
        let result = derive_fuel_efficiency(dec("5"), None, None, dec("0"));
        assert_eq!(result.km_driven, Decimal::ZERO);
        assert_eq!(result.efficiency, None);
    }

    #[test]
    fn test_efficiency_rounds_to_two_decimals() {
        let result = derive_fuel_efficiency(dec("3"), None, None, dec("100"));
        assert_eq!(result.efficiency, Some(dec("33.33")));
    }
}

use axum::{extract::State, routing::get, Json, Router};

use crate::models::analytics::{DashboardSummary, FleetAnalytics};
use crate::services::AnalyticsService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(fleet_analytics))
        .route("/dashboard", get(dashboard))
}

async fn fleet_analytics(State(state): State<AppState>) -> Result<Json<FleetAnalytics>, AppError> {
    let service = AnalyticsService::new(state.pool.clone());
    let report = service.fleet_analytics().await?;
    Ok(Json(report))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let service = AnalyticsService::new(state.pool.clone());
    let summary = service.dashboard_summary().await?;
    Ok(Json(summary))
}

//! Rutas de la API
//!
//! Un router por entidad, ensamblados en `create_app`. Las rutas de
//! escritura chequean la matriz de capacidades del rol antes de llamar
//! al service o repositorio.

pub mod analytics_routes;
pub mod auth_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Ensamblar la aplicación completa
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/driver", driver_routes::create_driver_router())
        .nest("/api/trip", trip_routes::create_trip_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/expense", expense_routes::create_expense_router())
        .nest("/api", analytics_routes::create_analytics_router())
        .route("/api/auth/me", get(auth_routes::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let cors = if state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/auth/register", post(auth_routes::register))
        .route("/api/auth/login", post(auth_routes::login))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleetflow",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

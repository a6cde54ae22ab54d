use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::Module;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/toggle", post(toggle_vehicle))
        .route("/:id/capacity", get(vehicle_capacity))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    user.require_write(Module::Vehicles)?;
    request.validate()?;

    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .create(
            request.name,
            request.license_plate,
            request.vehicle_type,
            request.max_capacity,
            request.odometer.unwrap_or_default(),
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Vehicle added successfully".to_string(),
    )))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicles = repository.list(filters.status, filters.vehicle_type).await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vehicle>, AppError> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", id))?;
    Ok(Json(vehicle))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    user.require_write(Module::Vehicles)?;
    request.validate()?;

    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .update(
            id,
            request.name,
            request.license_plate,
            request.vehicle_type,
            request.max_capacity,
            request.odometer,
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        vehicle,
        "Vehicle updated".to_string(),
    )))
}

async fn toggle_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    user.require_write(Module::Vehicles)?;

    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository.toggle_out_of_service(id).await?;

    Ok(Json(ApiResponse::success(vehicle)))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    user.require_write(Module::Vehicles)?;

    let repository = VehicleRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Vehicle deleted"
    })))
}

/// Capacidad máxima de un vehículo, para validar carga desde el cliente
async fn vehicle_capacity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", id))?;

    Ok(Json(json!({ "max_capacity": vehicle.max_capacity })))
}

use axum::{
    extract::{Path, State},
    routing::{post, put},
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverStatusRequest, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::driver::{Driver, DriverStatus};
use crate::models::user::Module;
use crate::repositories::driver_repository::DriverRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver).get(list_drivers))
        .route("/:id", put(update_driver).delete(delete_driver))
        .route("/:id/status", post(set_driver_status))
}

async fn create_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    user.require_write(Module::Drivers)?;
    request.validate()?;

    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository
        .create(
            request.name,
            request.email.unwrap_or_default(),
            request.phone.unwrap_or_default(),
            request.license_number,
            request.license_expiry,
            request.vehicle_category.unwrap_or_else(|| "Any".to_string()),
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        driver,
        "Driver added".to_string(),
    )))
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let repository = DriverRepository::new(state.pool.clone());
    let drivers = repository.list().await?;
    Ok(Json(drivers))
}

async fn update_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    user.require_write(Module::Drivers)?;
    request.validate()?;

    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository
        .update(
            id,
            request.name,
            request.email,
            request.phone,
            request.license_number,
            request.license_expiry,
            request.vehicle_category,
            request.safety_score,
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        driver,
        "Driver updated".to_string(),
    )))
}

async fn set_driver_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<DriverStatusRequest>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    user.require_write(Module::Drivers)?;

    let status = DriverStatus::parse(&request.status).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown driver status '{}'", request.status))
    })?;

    let repository = DriverRepository::new(state.pool.clone());
    let driver = repository.set_status(id, status.as_str()).await?;

    Ok(Json(ApiResponse::success(driver)))
}

async fn delete_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    user.require_write(Module::Drivers)?;

    let repository = DriverRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Driver removed"
    })))
}

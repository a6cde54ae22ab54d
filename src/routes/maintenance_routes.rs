use axum::{
    extract::{Path, State},
    routing::post,
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::CreateMaintenanceRequest;
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::maintenance::{MaintenanceLog, MaintenanceLogWithVehicle};
use crate::models::user::Module;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::MaintenanceService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_maintenance).get(list_maintenance))
        .route("/:id/complete", post(complete_maintenance))
}

async fn open_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceLog>>, AppError> {
    user.require_write(Module::Maintenance)?;
    request.validate()?;

    let service = MaintenanceService::new(state.pool.clone());
    let log = service.open_maintenance(&user, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        log,
        "Maintenance logged. Vehicle marked as In Shop".to_string(),
    )))
}

async fn list_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceLogWithVehicle>>, AppError> {
    let repository = MaintenanceRepository::new(state.pool.clone());
    let logs = repository.list_with_vehicle().await?;
    Ok(Json(logs))
}

async fn complete_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceLog>>, AppError> {
    user.require_write(Module::Maintenance)?;

    let service = MaintenanceService::new(state.pool.clone());
    let log = service.complete_maintenance(&user, id).await?;

    Ok(Json(ApiResponse::success_with_message(
        log,
        "Maintenance completed".to_string(),
    )))
}

use axum::{extract::State, routing::post, Extension, Json, Router};
use validator::Validate;

use crate::dto::expense_dto::CreateFuelLogRequest;
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::fuel::{FuelLog, FuelLogWithContext};
use crate::models::user::Module;
use crate::repositories::fuel_repository::FuelRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_expense_router() -> Router<AppState> {
    Router::new().route("/", post(add_fuel_log).get(list_fuel_logs))
}

async fn add_fuel_log(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLog>>, AppError> {
    user.require_write(Module::Expenses)?;
    request.validate()?;

    let vehicles = VehicleRepository::new(state.pool.clone());
    if vehicles.find_by_id(request.vehicle_id).await?.is_none() {
        return Err(not_found_error("Vehicle", request.vehicle_id));
    }

    let repository = FuelRepository::new(state.pool.clone());
    let log = repository
        .insert(
            request.vehicle_id,
            request.trip_id,
            request.liters,
            request.cost,
            request.odometer_reading,
            request.log_date,
            request.notes.unwrap_or_default(),
        )
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        log,
        "Fuel log added".to_string(),
    )))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelLogWithContext>>, AppError> {
    let repository = FuelRepository::new(state.pool.clone());
    let logs = repository.list_with_context().await?;
    Ok(Json(logs))
}

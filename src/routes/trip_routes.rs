use axum::{
    extract::{Path, State},
    routing::{post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{CreateTripRequest, TripResponse, TripStatusRequest, UpdateTripRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::trip::{Trip, TripWithNames};
use crate::models::user::Module;
use crate::repositories::trip_repository::TripRepository;
use crate::services::TripService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip).get(list_trips))
        .route("/:id", put(update_trip))
        .route("/:id/status", post(update_trip_status))
}

async fn create_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    user.require_write(Module::Trips)?;
    request.validate()?;

    let service = TripService::new(state.pool.clone());
    let response = service.create_trip(&user, request).await?;

    let message = if response.license_warning {
        "Trip created successfully (driver license is expired)".to_string()
    } else {
        "Trip created successfully".to_string()
    };

    Ok(Json(ApiResponse::success_with_message(response, message)))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<TripWithNames>>, AppError> {
    let repository = TripRepository::new(state.pool.clone());
    let trips = repository.list_with_names().await?;
    Ok(Json(trips))
}

async fn update_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    user.require_write(Module::Trips)?;
    request.validate()?;

    let service = TripService::new(state.pool.clone());
    let response = service.edit_trip(&user, id, request).await?;

    Ok(Json(ApiResponse::success_with_message(
        response,
        "Trip updated successfully".to_string(),
    )))
}

async fn update_trip_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<TripStatusRequest>,
) -> Result<Json<ApiResponse<Trip>>, AppError> {
    user.require_write(Module::Trips)?;
    request.validate()?;

    let service = TripService::new(state.pool.clone());
    let trip = service.transition_trip(&user, id, request).await?;

    let message = format!("Trip status updated to {}", trip.status);

    Ok(Json(ApiResponse::success_with_message(trip, message)))
}

use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::services::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), state.config.clone());
    let user = service.register(request).await?;

    Ok(Json(ApiResponse::success_with_message(
        user,
        "Account created successfully. Please sign in".to_string(),
    )))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), state.config.clone());
    let response = service.login(request).await?;

    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let service = AuthService::new(state.pool.clone(), state.config.clone());
    let response = service.me(user.user_id).await?;

    Ok(Json(response))
}

//! Servicio de autenticación
//!
//! Registro y login de usuarios. El password se guarda con bcrypt y la
//! sesión viaja como JWT; no hay estado de sesión en el servidor.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::middleware::auth::generate_jwt_token;
use crate::models::user::Role;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct AuthService {
    pool: PgPool,
    config: EnvironmentConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AppError> {
        if request.password != request.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        // Un rol desconocido cae a Dispatcher, igual que el alta original
        let role = request
            .role
            .as_deref()
            .and_then(Role::parse)
            .unwrap_or(Role::Dispatcher);

        let users = UserRepository::new(self.pool.clone());

        if users.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = users
            .create(request.name, request.email, password_hash, role.as_str())
            .await?;

        info!("👤 User {} registered with role {}", user.email, user.role);

        Ok(user.into())
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let users = UserRepository::new(self.pool.clone());

        let user = users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = bcrypt::verify(&request.password, &user.password)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = generate_jwt_token(&user, &self.config)?;

        info!("🔑 User {} logged in", user.email);

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = UserRepository::new(self.pool.clone())
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", user_id))?;

        Ok(user.into())
    }
}

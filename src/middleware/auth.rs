//! Middleware de autenticación JWT
//!
//! Extrae el token, lo valida y deja un principal request-scoped en las
//! extensions. No hay estado de sesión global: cada request lleva su
//! propio AuthenticatedUser.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::models::user::{Module, Role, User};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Principal autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Chequeo de la matriz de capacidades en la capa de rutas
    pub fn require_write(&self, module: Module) -> Result<(), AppError> {
        if !self.role.can_write(module) {
            return Err(AppError::Forbidden(format!(
                "Your role ({}) cannot modify {}",
                self.role.as_str(),
                module.as_str()
            )));
        }
        Ok(())
    }
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token_data = decode::<Claims>(
        auth_header,
        &DecodingKey::from_secret(state.config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    let claims = token_data.claims;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user id in token".to_string()))?;

    let role = Role::parse(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Unknown role in token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
        role,
    });

    Ok(next.run(request).await)
}

/// Generar el JWT para un usuario
pub fn generate_jwt_token(user: &User, config: &EnvironmentConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: user.id.to_string(),
        name: user.name.clone(),
        role: user.role.clone(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Error generating JWT: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_write_respects_capability_matrix() {
        let dispatcher = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            name: "Test Dispatcher".to_string(),
            role: Role::Dispatcher,
        };

        assert!(dispatcher.require_write(Module::Trips).is_ok());
        assert!(matches!(
            dispatcher.require_write(Module::Vehicles),
            Err(AppError::Forbidden(_))
        ));
    }
}

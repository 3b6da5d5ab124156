//! Authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from a bearer JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                debug!(path = %path, "Auth failed: No Authorization header");
                AppError::Unauthorized
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
            AppError::Unauthorized
        })?;

        let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
            debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
            e
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            debug!(path = %path, sub = %claims.sub, error = ?e, "Auth failed: Invalid user ID in token");
            AppError::InvalidToken
        })?;

        debug!(path = %path, user_id = %user_id, role = %claims.role, "User authenticated");

        Ok(AuthenticatedUser {
            id: user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{LoginRequest, LogoutRequest, RefreshTokenRequest, SignupRequest},
    response::{
        AuthResponse, CurrentUserResponse, LogoutResponse, RefreshResponse, SignupResponse,
        UserResponse,
    },
};

/// Register a new student or organizer account
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    // Validate request
    payload.validate()?;

    // Self-service signup never creates admins
    validation::validate_signup_role(&payload.role)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = AuthService::register(
        state.db(),
        &payload.email,
        &payload.password,
        &payload.name,
        &payload.role,
    )
    .await?;

    let response = SignupResponse {
        message: "User created successfully".to_string(),
        user: UserResponse::from(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // Validate request
    payload.validate()?;

    let (user, access_token, refresh_token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.email,
        &payload.password,
    )
    .await?;

    let response = AuthResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(user),
    };

    Ok(Json(response))
}

/// Refresh access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> AppResult<Json<RefreshResponse>> {
    let (access_token, refresh_token, expires_in) =
        AuthService::refresh_token(state.db(), state.config(), &payload.refresh_token).await?;

    let response = RefreshResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in,
    };

    Ok(Json(response))
}

/// Logout (revoke refresh tokens)
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<Option<LogoutRequest>>,
) -> AppResult<Json<LogoutResponse>> {
    let (refresh_token, all_sessions) = payload
        .map(|p| (p.refresh_token, p.all_sessions.unwrap_or(false)))
        .unwrap_or((None, true));

    AuthService::logout(
        state.db(),
        &auth_user.id,
        refresh_token.as_deref(),
        all_sessions,
    )
    .await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}

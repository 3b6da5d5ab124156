//! Admin handler implementations

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    config::Config,
    constants::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT, roles},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::ModerationAction,
    services::AdminService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{ListUsersQuery, ModerateEventsRequest, UpdateEventStatusRequest, UpdateUserRequest},
    response::{
        AdminUserDetailResponse, AdminUserResponse, AdminUsersListResponse,
        ModerateEventsResponse, PlatformStatsResponse, UpdateEventStatusResponse,
    },
};

/// Verify the caller is an admin: either the role claim says so, or the
/// caller's email matches the configured admin address.
fn require_admin(config: &Config, auth_user: &AuthenticatedUser) -> AppResult<()> {
    let email_match = config.admin.email.as_deref() == Some(auth_user.email.as_str());
    if auth_user.role != roles::ADMIN && !email_match {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    require_admin(state.config(), &auth_user)?;

    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);

    let (users, total) = AdminService::list_users(
        state.db(),
        offset,
        limit,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users: users.into_iter().map(AdminUserResponse::from).collect(),
        total,
    }))
}

/// Patch a user row (name, role, active flag).
/// Served for both `PATCH /users` and `POST /update-user`.
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<AdminUserDetailResponse>> {
    require_admin(state.config(), &auth_user)?;

    if let Some(role) = payload.updates.role.as_deref() {
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let user = AdminService::update_user(state.db(), &payload.user_id, &payload.updates).await?;

    Ok(Json(AdminUserDetailResponse {
        user: AdminUserResponse::from(user),
    }))
}

/// Set the persisted status of a single event
pub async fn update_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateEventStatusRequest>,
) -> AppResult<Json<UpdateEventStatusResponse>> {
    require_admin(state.config(), &auth_user)?;

    // Only the three persisted statuses are writable; derived values such
    // as "live" are rejected
    validation::validate_status(&payload.status)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    AdminService::set_event_status(state.db(), &payload.event_id, &payload.status).await?;

    Ok(Json(UpdateEventStatusResponse { success: true }))
}

/// Approve or reject a set of events in one call
pub async fn moderate_events(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ModerateEventsRequest>,
) -> AppResult<Json<ModerateEventsResponse>> {
    require_admin(state.config(), &auth_user)?;

    if payload.event_ids.is_empty() {
        return Err(AppError::Validation("Event IDs are required".to_string()));
    }

    let action = ModerationAction::parse(&payload.action)
        .ok_or_else(|| AppError::Validation("Invalid action".to_string()))?;

    let events = AdminService::moderate_events(state.db(), &payload.event_ids, action).await?;

    Ok(Json(ModerateEventsResponse {
        message: format!(
            "Successfully {} {} event(s)",
            action.past_tense(),
            events.len()
        ),
        events,
    }))
}

/// Platform-wide totals
pub async fn platform_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<PlatformStatsResponse>> {
    require_admin(state.config(), &auth_user)?;

    let stats = AdminService::platform_stats(state.db()).await?;

    Ok(Json(stats))
}

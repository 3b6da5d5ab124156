//! Event handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{AnalyticsService, EventService},
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateEventRequest, ListEventsQuery},
    response::{
        EventDetailResponse, EventsListResponse, OrganizerStatsResponse, TrackResponse,
    },
};

/// Verify the caller is an organizer
fn require_organizer(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ORGANIZER {
        return Err(AppError::Forbidden("Organizer access required".to_string()));
    }
    Ok(())
}

/// List events (with filtering)
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<Json<EventsListResponse>> {
    let events = EventService::list_events(state.db(), &query).await?;

    Ok(Json(EventsListResponse { events }))
}

/// Submit a new event (starts out pending)
pub async fn create_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventDetailResponse>)> {
    require_organizer(&auth_user)?;

    // Validate request
    payload.validate()?;
    validation::validate_category(&payload.category)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    validation::validate_link(&payload.registration_link)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if let Some(poster_url) = payload.poster_url.as_deref() {
        validation::validate_link(poster_url).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let event = EventService::create_event(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(EventDetailResponse { event })))
}

/// Get a specific event
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventDetailResponse>> {
    let event = EventService::get_event(state.db(), &id).await?;

    Ok(Json(EventDetailResponse { event }))
}

/// Delete an event (owning organizer only)
pub async fn delete_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    EventService::delete_event(state.db(), &id, &auth_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard aggregates for the authenticated organizer
pub async fn organizer_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<OrganizerStatsResponse>> {
    require_organizer(&auth_user)?;

    let stats = EventService::organizer_stats(state.db(), &auth_user.id).await?;

    Ok(Json(stats))
}

/// Record a page view
pub async fn track_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TrackResponse>> {
    AnalyticsService::track_view(state.db(), &id).await?;

    Ok(Json(TrackResponse { success: true }))
}

/// Record a registration link click
pub async fn track_click(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TrackResponse>> {
    AnalyticsService::track_click(state.db(), &id).await?;

    Ok(Json(TrackResponse { success: true }))
}

//! Admin service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::statuses,
    db::repositories::{AnalyticsRepository, EventRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::{request::UserUpdates, response::PlatformStatsResponse},
    models::{Event, ModerationAction, User},
};

/// Admin service for moderation and user management
pub struct AdminService;

impl AdminService {
    /// List users with optional search and role filter
    pub async fn list_users(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        UserRepository::list(pool, offset, limit, search, role).await
    }

    /// Patch a user row (name, role, active flag)
    pub async fn update_user(pool: &PgPool, user_id: &Uuid, updates: &UserUpdates) -> AppResult<User> {
        UserRepository::patch(
            pool,
            user_id,
            updates.name.as_deref(),
            updates.role.as_deref(),
            updates.is_active,
        )
        .await
    }

    /// Set the persisted status of a single event
    pub async fn set_event_status(pool: &PgPool, event_id: &Uuid, status: &str) -> AppResult<Event> {
        EventRepository::set_status(pool, event_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Apply one moderation action to a set of events in a single statement
    pub async fn moderate_events(
        pool: &PgPool,
        event_ids: &[Uuid],
        action: ModerationAction,
    ) -> AppResult<Vec<Event>> {
        EventRepository::set_status_bulk(pool, event_ids, action.target_status()).await
    }

    /// Platform-wide totals for the admin dashboard
    pub async fn platform_stats(pool: &PgPool) -> AppResult<PlatformStatsResponse> {
        let (total_users, total_events, pending_events, approved_events, archived_events) =
            futures::try_join!(
                UserRepository::count(pool),
                EventRepository::count(pool),
                EventRepository::count_by_status(pool, statuses::PENDING),
                EventRepository::count_by_status(pool, statuses::APPROVED),
                EventRepository::count_by_status(pool, statuses::ARCHIVED),
            )?;

        let (total_page_views, total_registration_clicks) =
            AnalyticsRepository::totals(pool).await?;

        Ok(PlatformStatsResponse {
            total_users,
            total_events,
            pending_events,
            approved_events,
            archived_events,
            total_page_views,
            total_registration_clicks,
        })
    }
}

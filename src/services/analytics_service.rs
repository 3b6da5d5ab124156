//! Analytics service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AnalyticsRepository, EventRepository},
    error::{AppError, AppResult},
    models::{CounterKind, EventAnalytics},
};

/// Analytics service for per-event counters
pub struct AnalyticsService;

impl AnalyticsService {
    /// Record a page view for an event
    pub async fn track_view(pool: &PgPool, event_id: &Uuid) -> AppResult<EventAnalytics> {
        Self::track(pool, event_id, CounterKind::PageView).await
    }

    /// Record a registration link click for an event
    pub async fn track_click(pool: &PgPool, event_id: &Uuid) -> AppResult<EventAnalytics> {
        Self::track(pool, event_id, CounterKind::RegistrationClick).await
    }

    async fn track(
        pool: &PgPool,
        event_id: &Uuid,
        kind: CounterKind,
    ) -> AppResult<EventAnalytics> {
        // The increment itself is a single upsert; this lookup only turns an
        // unknown event id into a 404 instead of a constraint violation.
        if EventRepository::find_by_id(pool, event_id).await?.is_none() {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        AnalyticsRepository::increment(pool, event_id, kind).await
    }
}

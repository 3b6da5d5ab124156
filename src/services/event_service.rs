//! Event service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{AnalyticsRepository, EventRepository},
    error::{AppError, AppResult},
    handlers::events::{
        request::{CreateEventRequest, ListEventsQuery},
        response::{EventResponse, OrganizerStatsResponse},
    },
};

/// Event service for business logic
pub struct EventService;

impl EventService {
    /// Create a new event for an organizer. The event starts out pending
    /// and gets a zeroed analytics row alongside.
    pub async fn create_event(
        pool: &PgPool,
        organizer_id: &Uuid,
        payload: CreateEventRequest,
    ) -> AppResult<EventResponse> {
        let event = EventRepository::create(
            pool,
            organizer_id,
            &payload.title,
            &payload.description,
            &payload.category,
            payload.date_time,
            &payload.venue,
            &payload.eligibility,
            &payload.contact_info,
            &payload.registration_link,
            payload.prize_details.as_deref(),
            payload.poster_url.as_deref(),
        )
        .await?;

        AnalyticsRepository::seed(pool, &event.id).await?;

        Self::get_event(pool, &event.id).await
    }

    /// Get a single event joined with organizer and analytics
    pub async fn get_event(pool: &PgPool, id: &Uuid) -> AppResult<EventResponse> {
        let listing = EventRepository::find_listing_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        Ok(EventResponse::from(listing))
    }

    /// List events with filters. A `status`/`category` filter of "all" is
    /// treated the same as no filter.
    pub async fn list_events(pool: &PgPool, query: &ListEventsQuery) -> AppResult<Vec<EventResponse>> {
        let status = query.status.as_deref().filter(|s| *s != "all");
        let category = query.category.as_deref().filter(|c| *c != "all");

        let listings = EventRepository::list(
            pool,
            status,
            category,
            query.organizer_id.as_ref(),
            query.search.as_deref(),
            query.offset(),
            query.limit(),
        )
        .await?;

        Ok(listings.into_iter().map(EventResponse::from).collect())
    }

    /// Delete an event. Only the owning organizer may remove it.
    pub async fn delete_event(pool: &PgPool, id: &Uuid, requester_id: &Uuid) -> AppResult<()> {
        let event = EventRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if !event.is_owned_by(requester_id) {
            return Err(AppError::Forbidden(
                "You can only delete your own events".to_string(),
            ));
        }

        EventRepository::delete(pool, id).await?;

        Ok(())
    }

    /// Dashboard aggregates for one organizer's events
    pub async fn organizer_stats(
        pool: &PgPool,
        organizer_id: &Uuid,
    ) -> AppResult<OrganizerStatsResponse> {
        let stats = sqlx::query_as::<_, OrganizerStatsResponse>(
            r#"
            SELECT
                COUNT(*)::bigint AS total_events,
                COUNT(*) FILTER (WHERE e.status = 'pending')::bigint AS pending_events,
                COUNT(*) FILTER (WHERE e.status = 'approved')::bigint AS approved_events,
                COUNT(*) FILTER (WHERE e.status = 'archived')::bigint AS archived_events,
                COALESCE(SUM(a.page_views), 0)::bigint AS total_page_views,
                COALESCE(SUM(a.registration_clicks), 0)::bigint AS total_registration_clicks
            FROM events e
            LEFT JOIN event_analytics a ON a.event_id = e.id
            WHERE e.organizer_id = $1
            "#,
        )
        .bind(organizer_id)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }
}

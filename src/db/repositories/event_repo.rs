//! Event repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Event, EventListing},
};

/// Columns selected by the joined listing queries
const LISTING_COLUMNS: &str = r#"
    e.id, e.title, e.description, e.category, e.date_time, e.venue,
    e.eligibility, e.contact_info, e.registration_link, e.prize_details,
    e.poster_url, e.organizer_id, e.status, e.created_at, e.updated_at,
    u.name AS organizer_name, u.email AS organizer_email,
    COALESCE(a.page_views, 0) AS page_views,
    COALESCE(a.registration_clicks, 0) AS registration_clicks
"#;

/// Repository for event database operations
pub struct EventRepository;

impl EventRepository {
    /// Create a new event. Events always start out pending.
    pub async fn create(
        pool: &PgPool,
        organizer_id: &Uuid,
        title: &str,
        description: &str,
        category: &str,
        date_time: chrono::DateTime<chrono::Utc>,
        venue: &str,
        eligibility: &str,
        contact_info: &str,
        registration_link: &str,
        prize_details: Option<&str>,
        poster_url: Option<&str>,
    ) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                organizer_id, title, description, category, date_time, venue,
                eligibility, contact_info, registration_link, prize_details,
                poster_url, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'pending')
            RETURNING *
            "#,
        )
        .bind(organizer_id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(date_time)
        .bind(venue)
        .bind(eligibility)
        .bind(contact_info)
        .bind(registration_link)
        .bind(prize_details)
        .bind(poster_url)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(r#"SELECT * FROM events WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(event)
    }

    /// Find event by ID, joined with organizer and analytics
    pub async fn find_listing_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<EventListing>> {
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM events e
            JOIN users u ON e.organizer_id = u.id
            LEFT JOIN event_analytics a ON a.event_id = e.id
            WHERE e.id = $1
            "#
        );

        let listing = sqlx::query_as::<_, EventListing>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(listing)
    }

    /// List events joined with organizer and analytics, newest first
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        category: Option<&str>,
        organizer_id: Option<&Uuid>,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<EventListing>> {
        let search_pattern = search.map(|s| format!("%{}%", s));
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM events e
            JOIN users u ON e.organizer_id = u.id
            LEFT JOIN event_analytics a ON a.event_id = e.id
            WHERE
                ($1::text IS NULL OR e.status = $1)
                AND ($2::text IS NULL OR e.category = $2)
                AND ($3::uuid IS NULL OR e.organizer_id = $3)
                AND ($4::text IS NULL
                     OR e.title ILIKE $4
                     OR e.description ILIKE $4
                     OR e.venue ILIKE $4)
            ORDER BY e.created_at DESC
            OFFSET $5 LIMIT $6
            "#
        );

        let listings = sqlx::query_as::<_, EventListing>(&sql)
            .bind(status)
            .bind(category)
            .bind(organizer_id)
            .bind(&search_pattern)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(listings)
    }

    /// Set the status of a single event and stamp `updated_at`.
    /// Writing the current status again is a plain overwrite, not an error.
    pub async fn set_status(pool: &PgPool, id: &Uuid, status: &str) -> AppResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Set the status of every event in `ids` in one statement. Ids that
    /// match no row are silently skipped; there is no per-item reporting.
    pub async fn set_status_bulk(
        pool: &PgPool,
        ids: &[Uuid],
        status: &str,
    ) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET status = $2, updated_at = NOW()
            WHERE id = ANY($1)
            RETURNING *
            "#,
        )
        .bind(ids)
        .bind(status)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Delete an event. Analytics rows go with it via FK cascade.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM events WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count total events
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM events"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count events in a given persisted status
    pub async fn count_by_status(pool: &PgPool, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM events WHERE status = $1"#)
            .bind(status)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

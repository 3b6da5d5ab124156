//! Event analytics repository
//!
//! Counter updates are single upsert statements so that concurrent trackers
//! cannot lose increments to a stale read.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CounterKind, EventAnalytics},
};

/// Repository for per-event analytics counters
pub struct AnalyticsRepository;

impl AnalyticsRepository {
    /// Seed a zeroed analytics row for a freshly created event. A row that
    /// already exists (e.g. created by an earlier tracking call) is left
    /// untouched.
    pub async fn seed(pool: &PgPool, event_id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO event_analytics (event_id, page_views, registration_clicks)
            VALUES ($1, 0, 0)
            ON CONFLICT (event_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Atomically increment one counter, creating the row on first access
    /// with the triggered counter at 1 and the other at 0.
    pub async fn increment(
        pool: &PgPool,
        event_id: &Uuid,
        kind: CounterKind,
    ) -> AppResult<EventAnalytics> {
        let sql = match kind {
            CounterKind::PageView => {
                r#"
                INSERT INTO event_analytics (event_id, page_views, registration_clicks)
                VALUES ($1, 1, 0)
                ON CONFLICT (event_id) DO UPDATE
                SET page_views = event_analytics.page_views + 1,
                    last_updated = NOW()
                RETURNING *
                "#
            }
            CounterKind::RegistrationClick => {
                r#"
                INSERT INTO event_analytics (event_id, page_views, registration_clicks)
                VALUES ($1, 0, 1)
                ON CONFLICT (event_id) DO UPDATE
                SET registration_clicks = event_analytics.registration_clicks + 1,
                    last_updated = NOW()
                RETURNING *
                "#
            }
        };

        let analytics = sqlx::query_as::<_, EventAnalytics>(sql)
            .bind(event_id)
            .fetch_one(pool)
            .await?;

        Ok(analytics)
    }

    /// Find the analytics row for an event
    pub async fn find_by_event(pool: &PgPool, event_id: &Uuid) -> AppResult<Option<EventAnalytics>> {
        let analytics = sqlx::query_as::<_, EventAnalytics>(
            r#"SELECT * FROM event_analytics WHERE event_id = $1"#,
        )
        .bind(event_id)
        .fetch_optional(pool)
        .await?;

        Ok(analytics)
    }

    /// Summed counters across all events
    pub async fn totals(pool: &PgPool) -> AppResult<(i64, i64)> {
        let (views, clicks): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(page_views), 0)::bigint,
                COALESCE(SUM(registration_clicks), 0)::bigint
            FROM event_analytics
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok((views, clicks))
    }
}

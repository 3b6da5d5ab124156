//! Event analytics model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-event analytics counters (at most one row per event)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventAnalytics {
    pub id: Uuid,
    pub event_id: Uuid,
    pub page_views: i64,
    pub registration_clicks: i64,
    pub last_updated: DateTime<Utc>,
}

/// Which counter a tracking request increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    PageView,
    RegistrationClick,
}

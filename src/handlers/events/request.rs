//! Event request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    DEFAULT_LIST_LIMIT, MAX_EVENT_DESCRIPTION_LENGTH, MAX_EVENT_TITLE_LENGTH, MAX_LIST_LIMIT,
    MAX_VENUE_LENGTH,
};

/// Create event request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = MAX_EVENT_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_EVENT_DESCRIPTION_LENGTH))]
    pub description: String,

    /// Category: Technical, Cultural, Sports, Academic, Competitions, Other
    pub category: String,

    /// When the event takes place
    pub date_time: DateTime<Utc>,

    #[validate(length(min = 1, max = MAX_VENUE_LENGTH))]
    pub venue: String,

    /// Who may attend (free text)
    pub eligibility: String,

    /// How to reach the organizers
    pub contact_info: String,

    /// Where students sign up; must be an http(s) URL
    pub registration_link: String,

    pub prize_details: Option<String>,

    pub poster_url: Option<String>,
}

/// List events query parameters
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Persisted status filter; "all" disables the filter
    pub status: Option<String>,
    /// Category filter; "all" disables the filter
    pub category: Option<String>,
    pub organizer_id: Option<Uuid>,
    /// Free-text match on title, description and venue
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListEventsQuery {
    /// Effective row limit, clamped
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }

    /// Effective row offset
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

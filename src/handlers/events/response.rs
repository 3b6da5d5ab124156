//! Event response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::EventListing;

/// Event joined with organizer and analytics, plus the derived
/// presentation-time status
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date_time: DateTime<Utc>,
    pub venue: String,
    pub eligibility: String,
    pub contact_info: String,
    pub registration_link: String,
    pub prize_details: Option<String>,
    pub poster_url: Option<String>,
    pub organizer_id: Uuid,
    pub organizer_name: String,
    pub organizer_email: String,
    /// Persisted status: pending, approved, archived
    pub status: String,
    /// Derived status: pending, upcoming, live, archived
    pub display_status: String,
    pub page_views: i64,
    pub registration_clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventListing> for EventResponse {
    fn from(listing: EventListing) -> Self {
        let display_status = listing.display_status().to_string();
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            category: listing.category,
            date_time: listing.date_time,
            venue: listing.venue,
            eligibility: listing.eligibility,
            contact_info: listing.contact_info,
            registration_link: listing.registration_link,
            prize_details: listing.prize_details,
            poster_url: listing.poster_url,
            organizer_id: listing.organizer_id,
            organizer_name: listing.organizer_name,
            organizer_email: listing.organizer_email,
            status: listing.status,
            display_status,
            page_views: listing.page_views,
            registration_clicks: listing.registration_clicks,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

/// Event list response
#[derive(Debug, Serialize)]
pub struct EventsListResponse {
    pub events: Vec<EventResponse>,
}

/// Single event response
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub event: EventResponse,
}

/// Tracking acknowledgement
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
}

/// Organizer dashboard aggregates
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct OrganizerStatsResponse {
    pub total_events: i64,
    pub pending_events: i64,
    pub approved_events: i64,
    pub archived_events: i64,
    pub total_page_views: i64,
    pub total_registration_clicks: i64,
}

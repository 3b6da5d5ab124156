//! Admin request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Set the persisted status of a single event
#[derive(Debug, Deserialize)]
pub struct UpdateEventStatusRequest {
    #[serde(rename = "eventId")]
    pub event_id: Uuid,

    /// Target persisted status: pending, approved or archived
    pub status: String,
}

/// Apply one moderation action to a set of events
#[derive(Debug, Deserialize)]
pub struct ModerateEventsRequest {
    #[serde(rename = "eventIds")]
    pub event_ids: Vec<Uuid>,

    /// "approve" or "reject"
    pub action: String,
}

/// Patch a user row
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    pub updates: UserUpdates,
}

/// Fields an admin may patch on a user
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdates {
    pub name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

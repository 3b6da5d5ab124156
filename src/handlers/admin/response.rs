//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Event, User};

/// Admin view of a user
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// User list response
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: i64,
}

/// Patched user response
#[derive(Debug, Serialize)]
pub struct AdminUserDetailResponse {
    pub user: AdminUserResponse,
}

/// Single event status update acknowledgement
#[derive(Debug, Serialize)]
pub struct UpdateEventStatusResponse {
    pub success: bool,
}

/// Bulk moderation response
#[derive(Debug, Serialize)]
pub struct ModerateEventsResponse {
    pub message: String,
    pub events: Vec<Event>,
}

/// Platform-wide totals for the admin dashboard
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub total_users: i64,
    pub total_events: i64,
    pub pending_events: i64,
    pub approved_events: i64,
    pub archived_events: i64,
    pub total_page_views: i64,
    pub total_registration_clicks: i64,
}

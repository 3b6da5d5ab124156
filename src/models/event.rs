//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::statuses;

/// Event database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Event {
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Get the presentation-time status of the event.
    ///
    /// Only `pending`, `approved` and `archived` are persisted; whether an
    /// approved event is "upcoming" or "live" depends on the clock.
    pub fn display_status(&self) -> EventDisplayStatus {
        self.display_status_at(Utc::now())
    }

    /// Presentation-time status relative to an explicit instant
    pub fn display_status_at(&self, now: DateTime<Utc>) -> EventDisplayStatus {
        derive_display_status(&self.status, self.date_time, now)
    }

    /// Check if the event belongs to the given organizer
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.organizer_id == *user_id
    }
}

/// Event row joined with its organizer and analytics counters, as read by
/// the listing and detail queries
#[derive(Debug, Clone, FromRow)]
pub struct EventListing {
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub organizer_name: String,
    pub organizer_email: String,
    pub page_views: i64,
    pub registration_clicks: i64,
}

impl EventListing {
    /// Presentation-time status, derived the same way as on [`Event`]
    pub fn display_status(&self) -> EventDisplayStatus {
        derive_display_status(&self.status, self.date_time, Utc::now())
    }
}

/// Map a persisted status and the event time onto the presentation-time
/// status. Only `approved` splits on the clock.
fn derive_display_status(
    status: &str,
    date_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> EventDisplayStatus {
    match status {
        statuses::APPROVED => {
            if date_time <= now {
                EventDisplayStatus::Live
            } else {
                EventDisplayStatus::Upcoming
            }
        }
        statuses::ARCHIVED => EventDisplayStatus::Archived,
        _ => EventDisplayStatus::Pending,
    }
}

/// Derived event status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDisplayStatus {
    Pending,
    Upcoming,
    Live,
    Archived,
}

impl std::fmt::Display for EventDisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::Live => write!(f, "live"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// Moderation action applied by an admin to one or more events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    /// Parse the wire form of an action
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            crate::constants::actions::APPROVE => Some(Self::Approve),
            crate::constants::actions::REJECT => Some(Self::Reject),
            _ => None,
        }
    }

    /// The persisted status this action transitions an event into.
    /// Rejection reuses `archived`; there is no separate rejected state.
    pub fn target_status(&self) -> &'static str {
        match self {
            Self::Approve => statuses::APPROVED,
            Self::Reject => statuses::ARCHIVED,
        }
    }

    /// Past-tense label for response messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event_with(status: &str, date_time: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Hackathon".to_string(),
            description: "24h coding sprint".to_string(),
            category: "Technical".to_string(),
            date_time,
            venue: "Main auditorium".to_string(),
            eligibility: "All students".to_string(),
            contact_info: "events@campus.edu".to_string(),
            registration_link: "https://example.com/register".to_string(),
            prize_details: None,
            poster_url: None,
            organizer_id: Uuid::new_v4(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_status_derivation() {
        let now = Utc::now();
        let future = now + Duration::hours(2);
        let past = now - Duration::hours(2);

        assert_eq!(
            event_with("approved", future).display_status_at(now),
            EventDisplayStatus::Upcoming
        );
        assert_eq!(
            event_with("approved", past).display_status_at(now),
            EventDisplayStatus::Live
        );
        assert_eq!(
            event_with("pending", past).display_status_at(now),
            EventDisplayStatus::Pending
        );
        assert_eq!(
            event_with("archived", future).display_status_at(now),
            EventDisplayStatus::Archived
        );
    }

    #[test]
    fn test_moderation_action_mapping() {
        assert_eq!(
            ModerationAction::parse("approve").unwrap().target_status(),
            "approved"
        );
        assert_eq!(
            ModerationAction::parse("reject").unwrap().target_status(),
            "archived"
        );
        assert!(ModerationAction::parse("publish").is_none());
        assert!(ModerationAction::parse("").is_none());
    }

    #[test]
    fn test_is_owned_by() {
        let event = event_with("pending", Utc::now());
        assert!(event.is_owned_by(&event.organizer_id));
        assert!(!event.is_owned_by(&Uuid::new_v4()));
    }
}

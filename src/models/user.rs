//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if user may submit events
    pub fn can_create_events(&self) -> bool {
        self.role == roles::ORGANIZER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "someone@campus.edu".to_string(),
            name: "Someone".to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user_with_role("admin").is_admin());
        assert!(!user_with_role("organizer").is_admin());
        assert!(!user_with_role("student").is_admin());
    }

    #[test]
    fn test_can_create_events() {
        assert!(user_with_role("organizer").can_create_events());
        assert!(!user_with_role("student").can_create_events());
        assert!(!user_with_role("admin").can_create_events());
    }
}

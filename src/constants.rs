//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Length of the opaque refresh token before hashing
pub const REFRESH_TOKEN_LENGTH: usize = 64;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORGANIZER: &str = "organizer";
    pub const STUDENT: &str = "student";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, ORGANIZER, STUDENT];

    /// Roles that may be chosen at signup (admin accounts are provisioned
    /// out of band)
    pub const SELF_SERVICE: &[&str] = &[STUDENT, ORGANIZER];
}

// =============================================================================
// EVENT LIFECYCLE
// =============================================================================

/// Persisted event statuses. "live" and "upcoming" are derived at
/// presentation time and never stored.
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const ARCHIVED: &str = "archived";

    /// All persisted statuses
    pub const ALL: &[&str] = &[PENDING, APPROVED, ARCHIVED];
}

/// Moderation actions accepted by the bulk approval endpoint
pub mod actions {
    pub const APPROVE: &str = "approve";
    pub const REJECT: &str = "reject";

    /// All moderation actions
    pub const ALL: &[&str] = &[APPROVE, REJECT];
}

/// Event categories
pub mod categories {
    pub const TECHNICAL: &str = "Technical";
    pub const CULTURAL: &str = "Cultural";
    pub const SPORTS: &str = "Sports";
    pub const ACADEMIC: &str = "Academic";
    pub const COMPETITIONS: &str = "Competitions";
    pub const OTHER: &str = "Other";

    /// All event categories
    pub const ALL: &[&str] = &[TECHNICAL, CULTURAL, SPORTS, ACADEMIC, COMPETITIONS, OTHER];
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default number of rows returned by list endpoints
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of rows returned by list endpoints
pub const MAX_LIST_LIMIT: i64 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum event title length
pub const MAX_EVENT_TITLE_LENGTH: u64 = 256;

/// Maximum event description length
pub const MAX_EVENT_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum venue length
pub const MAX_VENUE_LENGTH: u64 = 256;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 128;

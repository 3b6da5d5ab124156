//! Business logic services

pub mod admin_service;
pub mod analytics_service;
pub mod auth_service;
pub mod event_service;

pub use admin_service::AdminService;
pub use analytics_service::AnalyticsService;
pub use auth_service::AuthService;
pub use event_service::EventService;

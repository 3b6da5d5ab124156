//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod analytics_repo;
pub mod event_repo;
pub mod token_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepository;
pub use event_repo::EventRepository;
pub use token_repo::TokenRepository;
pub use user_repo::UserRepository;

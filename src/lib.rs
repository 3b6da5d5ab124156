//! Eventboard - College Event Listing Backend
//!
//! This library provides the core functionality for the Eventboard platform:
//! organizers submit events, admins approve or reject them, and students
//! browse approved events.
//!
//! # Features
//!
//! - Event lifecycle (pending → approved/archived) with single and bulk
//!   admin moderation
//! - Per-event analytics counters (page views, registration clicks) with
//!   atomic increments
//! - Role-based access control (admin, organizer, student)
//! - JWT authentication with rotating refresh tokens
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

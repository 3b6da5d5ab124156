//! Admin moderation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/users", get(handler::list_users))
        .route("/users", patch(handler::update_user))
        // Kept alongside PATCH /users: both forms exist in the public API
        .route("/update-user", post(handler::update_user))
        // Event moderation
        .route("/update-event", post(handler::update_event))
        .route("/events/approve", post(handler::moderate_events))
        // Dashboard
        .route("/stats", get(handler::platform_stats))
}

//! Event listing and tracking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Listing and creation
        .route("/", get(handler::list_events))
        .route("/", post(handler::create_event))
        // Organizer dashboard aggregates
        .route("/stats", get(handler::organizer_stats))
        // Single event
        .route("/{id}", get(handler::get_event))
        .route("/{id}", delete(handler::delete_event))
        // Analytics counters
        .route("/{id}/track-view", post(handler::track_view))
        .route("/{id}/track-click", post(handler::track_click))
}

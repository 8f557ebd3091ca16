//! API route definitions for the social graph HTTP API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::core::AppState;

/// Operation dispatcher and read-only REST routes
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        // Dispatcher
        .route("/api/operations", post(handlers::execute_operation))

        // User routes
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/:id", get(handlers::get_user))

        // Post routes
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/:id", get(handlers::get_post))
}

/// Root, health, info and metrics routes
pub fn create_system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::system_info))
        .route("/metrics", get(handlers::metrics_handler))
}

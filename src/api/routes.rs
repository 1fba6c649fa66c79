//! API routes configuration module

use crate::api::handlers::{get_task, health, submit_task};
use crate::db::Database;
use axum::{
    routing::{get, post},
    Extension, Router,
};

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/submit", post(submit_task))
        .route("/api/task/:id", get(get_task))
        .layer(Extension(database))
}

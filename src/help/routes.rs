use super::handlers;
use axum::{routing::get, Router};

/// Creates the help router
pub fn help_routes() -> Router {
    Router::new().route("/api/help/topics", get(handlers::get_help_topics))
}

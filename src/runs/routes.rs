use super::handlers;
use axum::{routing::get, Router};

/// Creates the runs router
pub fn runs_routes() -> Router {
    Router::new().route("/api/runs", get(handlers::get_runs))
}

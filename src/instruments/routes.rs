use super::handlers;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the instruments router
pub fn instruments_routes() -> Router {
    Router::new()
        .route("/api/instruments", get(handlers::get_instruments))
        .route(
            "/api/instruments/:instrument/pause",
            post(handlers::pause_instrument),
        )
}

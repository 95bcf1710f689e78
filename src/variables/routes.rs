use super::handlers;
use axum::{routing::get, Router};

/// Creates the router for variable set submission and management
pub fn variables_routes() -> Router {
    Router::new().route(
        "/api/instruments/:instrument/variables",
        get(handlers::get_variable_sets)
            .post(handlers::submit_variables)
            .delete(handlers::delete_variables),
    )
}

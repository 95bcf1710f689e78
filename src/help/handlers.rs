use super::models::{help_catalogue, HelpQuery};
use super::search::search_topics;
use axum::{extract::Query, response::IntoResponse, Json};

/// GET /api/help/topics?search=&category= - Filtered help topics
pub async fn get_help_topics(Query(params): Query<HelpQuery>) -> impl IntoResponse {
    let topics = search_topics(
        help_catalogue(),
        params.search.as_deref().unwrap_or(""),
        params.category.as_deref().unwrap_or("all"),
    );

    Json(topics)
}

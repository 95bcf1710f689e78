use super::models::RunsQuery;
use super::search::filter_runs;
use super::services::RunsService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /api/runs?instrument=&search= - List reduction runs
pub async fn get_runs(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<RunsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let runs_service = RunsService::new(app_state.db.clone());

    let runs = runs_service.get_runs(params.instrument.as_deref()).await?;
    let runs = filter_runs(runs, params.search.as_deref().unwrap_or(""));

    Ok(Json(runs))
}

use super::conflicts::{find_conflicts, parse_run_number};
use super::models::{DeleteVariablesQuery, MessageResponse, SubmitVariablesRequest, SubmissionMode};
use super::services::VariablesService;
use super::validators::FormValidator;
use crate::common::{ApiError, AppState, Validator};
use crate::instruments::services::InstrumentsService;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// ============================================================================
// Variable Set Handlers
// ============================================================================

/// GET /api/instruments/:instrument/variables - List stored variable sets
pub async fn get_variable_sets(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(instrument): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let variables_service = VariablesService::new(app_state.db.clone());

    let sets = variables_service.get_variable_sets(&instrument).await?;

    Ok(Json(sets))
}

/// POST /api/instruments/:instrument/variables - Submit a variables form
///
/// The submitted form is validated first; any rule failure returns 400
/// with the aggregated messages. A run-range submission is then checked
/// against upcoming scheduled runs, and unconfirmed conflicts return 409
/// so the client can ask the user before re-submitting with
/// `confirm_conflicts` set.
pub async fn submit_variables(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(instrument): Path<String>,
    Json(request): Json<SubmitVariablesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation_result = FormValidator.validate(&request.to_form());
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let app_state = state.read().await;
    let instruments_service = InstrumentsService::new(app_state.db.clone());
    let variables_service = VariablesService::new(app_state.db.clone());

    // 404 for unknown instruments before any writes
    instruments_service.get_instrument(&instrument).await?;

    if request.mode == SubmissionMode::ByRunRange && !request.confirm_conflicts {
        let upcoming = variables_service.upcoming_run_numbers(&instrument).await?;
        if let Some(start) = parse_run_number(&request.run_start) {
            let conflicts = find_conflicts(start, parse_run_number(&request.run_end), &upcoming);
            if !conflicts.is_empty() {
                info!(instrument, ?conflicts, "Submission clashes with upcoming runs");
                return Err(ApiError::RunConflicts(conflicts));
            }
        }
    }

    let set = variables_service
        .save_variable_set(&instrument, &request)
        .await?;

    Ok((StatusCode::CREATED, Json(set)))
}

/// DELETE /api/instruments/:instrument/variables - Delete variable sets
/// selected by ?start=&end= or by ?experiment_reference=
pub async fn delete_variables(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(instrument): Path<String>,
    Query(params): Query<DeleteVariablesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let instruments_service = InstrumentsService::new(app_state.db.clone());
    let variables_service = VariablesService::new(app_state.db.clone());

    instruments_service.get_instrument(&instrument).await?;

    let deleted = variables_service
        .delete_variable_sets(&instrument, params.start, params.end, params.experiment_reference)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Deleted {} variable set(s)", deleted),
    }))
}

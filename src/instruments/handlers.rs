use super::models::{next_paused_state, PauseInstrumentRequest, PauseInstrumentResponse};
use super::services::InstrumentsService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// GET /api/instruments - List instruments with their pause state
pub async fn get_instruments(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let instruments_service = InstrumentsService::new(app_state.db.clone());

    let instruments = instruments_service.get_all_instruments().await?;

    Ok(Json(instruments))
}

/// POST /api/instruments/:instrument/pause - Toggle the paused flag
pub async fn pause_instrument(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(instrument): Path<String>,
    Json(request): Json<PauseInstrumentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let instruments_service = InstrumentsService::new(app_state.db.clone());

    instruments_service.get_instrument(&instrument).await?;

    let paused = next_paused_state(&request.currently_paused);
    instruments_service.set_paused(&instrument, paused).await?;

    info!(instrument, paused, "Toggled instrument pause state");

    Ok(Json(PauseInstrumentResponse {
        currently_paused: paused,
    }))
}

use crate::common::helpers::serialize_flag_to_bool;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Instrument {
    pub name: String,
    #[serde(serialize_with = "serialize_flag_to_bool")]
    pub is_active: i64,
    #[serde(serialize_with = "serialize_flag_to_bool")]
    pub is_paused: i64,
}

/// The pause button posts the state the page was rendered with; the
/// stored flag becomes its negation.
#[derive(Debug, Deserialize)]
pub struct PauseInstrumentRequest {
    pub currently_paused: String,
}

#[derive(Debug, Serialize)]
pub struct PauseInstrumentResponse {
    pub currently_paused: bool,
}

/// New paused state from the client's view of the current one. Anything
/// other than "false" counts as paused, so the toggle resumes.
pub fn next_paused_state(currently_paused: &str) -> bool {
    currently_paused.trim().eq_ignore_ascii_case("false")
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One execution of a data-reduction job, identified by run number and
/// version.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReductionRun {
    pub run_number: i64,
    pub run_version: i64,
    pub instrument: String,
    pub title: Option<String>,
    pub experiment_reference: Option<i64>,
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RunsQuery {
    pub instrument: Option<String>,
    pub search: Option<String>,
}

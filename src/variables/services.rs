use super::models::{SubmitVariablesRequest, SubmissionMode, VariableSet};
use crate::common::ApiError;
use crate::variables::conflicts::parse_run_number;
use sqlx::SqlitePool;
use tracing::info;

pub struct VariablesService {
    db: SqlitePool,
}

impl VariablesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all stored variable sets for an instrument
    pub async fn get_variable_sets(&self, instrument: &str) -> Result<Vec<VariableSet>, ApiError> {
        let sets = sqlx::query_as::<_, VariableSet>(
            r#"
            SELECT id, instrument, start_run, end_run, experiment_reference, variables, created_at
            FROM variable_sets
            WHERE instrument = ?
            ORDER BY start_run ASC, id ASC
            "#,
        )
        .bind(instrument)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(sets)
    }

    /// Store a validated submission as a new variable set
    pub async fn save_variable_set(
        &self,
        instrument: &str,
        request: &SubmitVariablesRequest,
    ) -> Result<VariableSet, ApiError> {
        let (start_run, end_run, experiment_reference) = match request.mode {
            SubmissionMode::ByRunRange => (
                parse_run_number(&request.run_start),
                parse_run_number(&request.run_end).filter(|&end| end != 0),
                None,
            ),
            SubmissionMode::ByExperiment => {
                (None, None, parse_run_number(&request.experiment_reference))
            }
            // Batch submissions span disjoint runs; the raw range text is
            // kept with the variables instead of a start/end pair
            SubmissionMode::ByBatch => (None, None, None),
        };

        let variables_json = serde_json::to_string(&request.variables)
            .map_err(|e| ApiError::InternalServer(format!("Failed to encode variables: {}", e)))?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO variable_sets
                (instrument, start_run, end_run, experiment_reference, variables, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(instrument)
        .bind(start_run)
        .bind(end_run)
        .bind(experiment_reference)
        .bind(&variables_json)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let id = result.last_insert_rowid();
        info!(instrument, id, "Stored variable set");

        Ok(VariableSet {
            id,
            instrument: instrument.to_string(),
            start_run,
            end_run,
            experiment_reference,
            variables: variables_json,
            created_at: Some(now),
        })
    }

    /// Delete variable sets by run range or experiment reference
    pub async fn delete_variable_sets(
        &self,
        instrument: &str,
        start: Option<i64>,
        end: Option<i64>,
        experiment_reference: Option<i64>,
    ) -> Result<u64, ApiError> {
        let result = if let Some(experiment_reference) = experiment_reference {
            sqlx::query(
                "DELETE FROM variable_sets WHERE instrument = ? AND experiment_reference = ?",
            )
            .bind(instrument)
            .bind(experiment_reference)
            .execute(&self.db)
            .await
        } else if let Some(start) = start {
            match end {
                Some(end) if end != 0 => {
                    sqlx::query(
                        "DELETE FROM variable_sets WHERE instrument = ? AND start_run = ? AND end_run = ?",
                    )
                    .bind(instrument)
                    .bind(start)
                    .bind(end)
                    .execute(&self.db)
                    .await
                }
                _ => {
                    sqlx::query(
                        "DELETE FROM variable_sets WHERE instrument = ? AND start_run = ? AND end_run IS NULL",
                    )
                    .bind(instrument)
                    .bind(start)
                    .execute(&self.db)
                    .await
                }
            }
        } else {
            return Err(ApiError::BadRequest(
                "Either start or experiment_reference is required".to_string(),
            ));
        };

        let deleted = result.map_err(ApiError::DatabaseError)?.rows_affected();
        info!(instrument, deleted, "Deleted variable sets");

        Ok(deleted)
    }

    /// Run numbers already scheduled for an instrument, used for
    /// conflict detection against a newly requested range
    pub async fn upcoming_run_numbers(&self, instrument: &str) -> Result<Vec<i64>, ApiError> {
        let runs = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT run_number
            FROM reduction_runs
            WHERE instrument = ? AND status = 'Scheduled'
            ORDER BY run_number ASC
            "#,
        )
        .bind(instrument)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(runs)
    }
}

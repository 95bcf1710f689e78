use super::models::ReductionRun;
use crate::common::ApiError;
use sqlx::SqlitePool;

pub struct RunsService {
    db: SqlitePool,
}

impl RunsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get reduction runs, optionally limited to one instrument
    pub async fn get_runs(&self, instrument: Option<&str>) -> Result<Vec<ReductionRun>, ApiError> {
        let runs = if let Some(instrument) = instrument {
            sqlx::query_as::<_, ReductionRun>(
                r#"
                SELECT run_number, run_version, instrument, title, experiment_reference,
                       status, created_at
                FROM reduction_runs
                WHERE instrument = ?
                ORDER BY run_number DESC, run_version DESC
                "#,
            )
            .bind(instrument)
            .fetch_all(&self.db)
            .await
        } else {
            sqlx::query_as::<_, ReductionRun>(
                r#"
                SELECT run_number, run_version, instrument, title, experiment_reference,
                       status, created_at
                FROM reduction_runs
                ORDER BY run_number DESC, run_version DESC
                "#,
            )
            .fetch_all(&self.db)
            .await
        }
        .map_err(ApiError::DatabaseError)?;

        Ok(runs)
    }
}

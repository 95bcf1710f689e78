use super::models::Instrument;
use crate::common::ApiError;
use sqlx::SqlitePool;

pub struct InstrumentsService {
    db: SqlitePool,
}

impl InstrumentsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all instruments
    pub async fn get_all_instruments(&self) -> Result<Vec<Instrument>, ApiError> {
        let instruments = sqlx::query_as::<_, Instrument>(
            r#"
            SELECT name, is_active, is_paused
            FROM instruments
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(instruments)
    }

    /// Get an instrument by name
    pub async fn get_instrument(&self, name: &str) -> Result<Instrument, ApiError> {
        let instrument = sqlx::query_as::<_, Instrument>(
            r#"
            SELECT name, is_active, is_paused
            FROM instruments
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Instrument {} not found", name)))?;

        Ok(instrument)
    }

    /// Set the paused flag for an instrument
    pub async fn set_paused(&self, name: &str, paused: bool) -> Result<(), ApiError> {
        sqlx::query("UPDATE instruments SET is_paused = ? WHERE name = ?")
            .bind(if paused { 1_i64 } else { 0_i64 })
            .bind(name)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(())
    }
}

// Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations.
///
/// Tables are created idempotently; set RESET_DB=true to drop and
/// recreate the schema from scratch.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
    }

    create_instrument_tables(pool).await?;
    create_run_tables(pool).await?;
    create_variable_tables(pool).await?;
    create_indexes(pool).await?;

    if env::var("SEED_DEMO_DATA").unwrap_or_else(|_| "false".to_string()) == "true" {
        seed_demo_data(pool).await?;
    }

    info!("Database migration completed");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for table in ["variable_sets", "reduction_runs", "instruments"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn create_instrument_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instruments (
            name TEXT PRIMARY KEY,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_paused INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_run_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reduction_runs (
            run_number INTEGER NOT NULL,
            run_version INTEGER NOT NULL DEFAULT 0,
            instrument TEXT NOT NULL REFERENCES instruments(name),
            title TEXT,
            experiment_reference INTEGER,
            status TEXT NOT NULL DEFAULT 'Queued',
            created_at TEXT,
            PRIMARY KEY (run_number, run_version, instrument)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_variable_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS variable_sets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            instrument TEXT NOT NULL REFERENCES instruments(name),
            start_run INTEGER,
            end_run INTEGER,
            experiment_reference INTEGER,
            variables TEXT NOT NULL,
            created_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = vec![
        "CREATE INDEX IF NOT EXISTS idx_runs_instrument ON reduction_runs(instrument)",
        "CREATE INDEX IF NOT EXISTS idx_runs_status ON reduction_runs(status)",
        "CREATE INDEX IF NOT EXISTS idx_variable_sets_instrument ON variable_sets(instrument)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

/// Insert a handful of instruments and scheduled runs so the API is
/// explorable without the production message queue feeding it.
async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for instrument in ["MARI", "WISH", "POLARIS", "MUSR"] {
        sqlx::query("INSERT OR IGNORE INTO instruments (name, is_active, is_paused) VALUES (?, 1, 0)")
            .bind(instrument)
            .execute(pool)
            .await?;
    }

    let now = chrono::Utc::now().to_rfc3339();
    let runs = vec![
        (60300_i64, "MARI", "Vanadium calibration", 1410351_i64, "Completed"),
        (60301_i64, "MARI", "Sample scan 5K", 1410351_i64, "Completed"),
        (60310_i64, "MARI", "Sample scan 50K", 1410351_i64, "Scheduled"),
        (60311_i64, "MARI", "Sample scan 100K", 1410351_i64, "Scheduled"),
        (44521_i64, "WISH", "Powder alignment", 1390045_i64, "Completed"),
        (44530_i64, "WISH", "Magnetic structure", 1390045_i64, "Scheduled"),
    ];
    for (run_number, instrument, title, experiment, status) in runs {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO reduction_runs
                (run_number, run_version, instrument, title, experiment_reference, status, created_at)
            VALUES (?, 0, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(run_number)
        .bind(instrument)
        .bind(title)
        .bind(experiment)
        .bind(status)
        .bind(&now)
        .execute(pool)
        .await?;
    }

    info!("Seeded demo instruments and runs");

    Ok(())
}

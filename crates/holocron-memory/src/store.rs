//! SQLite-backed preference persistence.

use holocron_core::{config::MemoryConfig, error::HolocronError, shellexpand};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Persistent `requester_id → locale` table.
#[derive(Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    /// Open (or create) the database at `config.db_path`.
    pub async fn new(config: &MemoryConfig) -> Result<Self, HolocronError> {
        let db_path = shellexpand(&config.db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| HolocronError::Memory(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| HolocronError::Memory(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| HolocronError::Memory(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Preference store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Wrap an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, HolocronError> {
        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<(), HolocronError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS preferences (
                requester_id TEXT PRIMARY KEY,
                locale TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| HolocronError::Memory(format!("failed to create preferences table: {e}")))?;
        Ok(())
    }

    /// Upsert a requester's locale.
    pub async fn save(&self, requester_id: &str, locale: &str) -> Result<(), HolocronError> {
        sqlx::query(
            "INSERT INTO preferences (requester_id, locale) VALUES (?, ?) \
             ON CONFLICT(requester_id) DO UPDATE SET locale = excluded.locale, updated_at = datetime('now')",
        )
        .bind(requester_id)
        .bind(locale)
        .execute(&self.pool)
        .await
        .map_err(|e| HolocronError::Memory(format!("upsert preference failed: {e}")))?;
        Ok(())
    }

    /// Every stored preference.
    pub async fn load_all(&self) -> Result<Vec<(String, String)>, HolocronError> {
        sqlx::query_as("SELECT requester_id, locale FROM preferences ORDER BY requester_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| HolocronError::Memory(format!("query failed: {e}")))
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::db::{DbKind, DbSettings};
use crate::domain::clock::{Clock, SystemClock};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db: DbSettings,
    clock: Option<Arc<dyn Clock>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db: DbSettings::default(),
            clock: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db.kind = kind;
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db.path = path.into();
        self
    }

    pub fn with_settings(mut self, settings: DbSettings) -> Self {
        self.db = settings;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Connect, migrate, and wrap everything in an `AppState`.
    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = bootstrap_db(&self.db).await?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(AppState::new(conn, clock))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use migration::count_applied_migrations;

    use super::*;

    #[tokio::test]
    async fn memory_state_is_migrated() -> Result<(), AppError> {
        let state = build_state().with_db(DbKind::SqliteMemory).build().await?;
        assert_eq!(count_applied_migrations(state.db()).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn file_state_persists_schema() -> Result<(), AppError> {
        let dir = tempfile::tempdir().map_err(|e| AppError::internal(e.to_string()))?;
        let path = dir.path().join("scoreboard.sqlite3");

        build_state().with_path(&path).build().await?;
        assert!(path.exists());

        // Re-bootstrapping an existing file is a no-op migration.
        let state = build_state().with_path(&path).build().await?;
        assert_eq!(count_applied_migrations(state.db()).await?, 1);
        Ok(())
    }
}

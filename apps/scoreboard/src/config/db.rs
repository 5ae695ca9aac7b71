use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{opt_var, parse_var};
use crate::error::AppError;

pub const ENV_DB_KIND: &str = "SCOREBOARD_DB_KIND";
pub const ENV_DB_PATH: &str = "SCOREBOARD_DB_PATH";
pub const ENV_DB_BUSY_TIMEOUT_MS: &str = "SCOREBOARD_DB_BUSY_TIMEOUT_MS";

pub const DEFAULT_DB_PATH: &str = "scoreboard.sqlite3";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Which SQLite store backs the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbKind {
    /// Durable file database.
    #[default]
    SqliteFile,
    /// Private in-memory database on one pinned connection.
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite-file" | "file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(format!(
                "unknown db kind '{other}' (expected sqlite-file or sqlite-memory)"
            )),
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
        })
    }
}

/// Connection settings for the Entity Store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub kind: DbKind,
    pub path: PathBuf,
    pub busy_timeout_ms: u64,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            kind: DbKind::SqliteFile,
            path: PathBuf::from(DEFAULT_DB_PATH),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DbSettings {
    pub fn memory() -> Self {
        Self {
            kind: DbKind::SqliteMemory,
            ..Self::default()
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: DbKind::SqliteFile,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Settings from `SCOREBOARD_DB_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let mut settings = Self::default();
        if let Some(kind) = parse_var::<DbKind>(ENV_DB_KIND)? {
            settings.kind = kind;
        }
        if let Some(path) = opt_var(ENV_DB_PATH) {
            settings.path = PathBuf::from(path);
        }
        if let Some(ms) = parse_var::<u64>(ENV_DB_BUSY_TIMEOUT_MS)? {
            settings.busy_timeout_ms = ms;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.kind == DbKind::SqliteFile && self.path.as_os_str().is_empty() {
            return Err(AppError::config("SQLite file database requires a path"));
        }
        Ok(())
    }

    /// sqlx connection string for these settings.
    pub fn conn_spec(&self) -> String {
        match self.kind {
            DbKind::SqliteFile => format!("sqlite://{}", self.path.display()),
            DbKind::SqliteMemory => "sqlite::memory:".to_string(),
        }
    }

    /// Per-connection statements run in the pool's `after_connect` hook.
    pub fn session_statements(&self) -> Vec<String> {
        vec![
            "PRAGMA foreign_keys = ON;".to_string(),
            format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    fn clear_env() {
        env::remove_var(ENV_DB_KIND);
        env::remove_var(ENV_DB_PATH);
        env::remove_var(ENV_DB_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn db_kind_parses_both_spellings() {
        assert_eq!("sqlite-file".parse::<DbKind>().unwrap(), DbKind::SqliteFile);
        assert_eq!("Memory".parse::<DbKind>().unwrap(), DbKind::SqliteMemory);
        assert!("postgres".parse::<DbKind>().is_err());
    }

    #[test]
    fn conn_spec_per_kind() {
        assert_eq!(DbSettings::memory().conn_spec(), "sqlite::memory:");
        assert_eq!(
            DbSettings::file("/tmp/games.db").conn_spec(),
            "sqlite:///tmp/games.db"
        );
    }

    #[test]
    fn session_statements_enable_foreign_keys() {
        let stmts = DbSettings::memory().session_statements();
        assert_eq!(stmts[0], "PRAGMA foreign_keys = ON;");
        assert_eq!(stmts[1], "PRAGMA busy_timeout = 5000;");
    }

    #[test]
    #[serial]
    fn from_env_defaults() {
        clear_env();
        let settings = DbSettings::from_env().unwrap();
        assert_eq!(settings, DbSettings::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        clear_env();
        env::set_var(ENV_DB_KIND, "sqlite-memory");
        env::set_var(ENV_DB_BUSY_TIMEOUT_MS, "250");
        let settings = DbSettings::from_env().unwrap();
        assert_eq!(settings.kind, DbKind::SqliteMemory);
        assert_eq!(settings.busy_timeout_ms, 250);
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_rejects_bad_timeout() {
        clear_env();
        env::set_var(ENV_DB_BUSY_TIMEOUT_MS, "soon");
        let err = DbSettings::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_DB_BUSY_TIMEOUT_MS));
        clear_env();
    }
}

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::info;

use crate::error::AppError;

const PRAGMAS: [&str; 4] = ["foreign_keys", "journal_mode", "busy_timeout", "synchronous"];

/// Log the PRAGMAs a freshly built pool ended up with.
pub async fn log_pragma_snapshot(db: &DatabaseConnection, label: &str) -> Result<(), AppError> {
    let mut parts = Vec::with_capacity(PRAGMAS.len());

    for pragma in PRAGMAS {
        let stmt = Statement::from_string(DatabaseBackend::Sqlite, format!("PRAGMA {pragma};"));
        if let Some(row) = db.query_one(stmt).await? {
            let value = row
                .try_get::<String>("", pragma)
                .or_else(|_| row.try_get::<i64>("", pragma).map(|v| v.to_string()))
                .unwrap_or_else(|_| "?".to_string());
            parts.push(format!("{pragma}={value}"));
        }
    }

    info!("sqlite_pragmas label={} {}", label, parts.join(" "));
    Ok(())
}

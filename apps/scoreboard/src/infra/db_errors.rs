//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let prefix = "UNIQUE constraint failed: ";
    let start = error_msg.find(prefix)? + prefix.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

/// Map SQLite table.column format to domain-specific errors.
fn map_sqlite_table_column(table_column: &str) -> Option<DomainError> {
    match table_column {
        "players.color" | "players.game_id" => Some(DomainError::validation(
            ValidationKind::DuplicateColor,
            "Each player of a game needs a distinct color",
        )),
        "pictures.game_id" => Some(DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Game already has a board picture",
        )),
        _ => None,
    }
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(msg) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), msg.clone());
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("GAME_NOT_FOUND:") => {
            if let Some(game_id) = msg
                .strip_prefix("GAME_NOT_FOUND:")
                .and_then(|s| s.parse::<i64>().ok())
            {
                return DomainError::game_not_found(game_id);
            }
            return DomainError::not_found(NotFoundKind::Game, "Game not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if error_msg.contains("UNIQUE constraint failed") {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        if let Some(mapped) = extract_sqlite_table_column(&error_msg).and_then(map_sqlite_table_column)
        {
            return mapped;
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation(
            ValidationKind::Other("Check".into()),
            "Check constraint violation",
        );
    }

    if error_msg.contains("FOREIGN KEY constraint failed") {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::not_found(
            NotFoundKind::Other("Reference".into()),
            "Referenced record does not exist",
        );
    }

    if error_msg.contains("database is locked") || error_msg.contains("timed out") {
        warn!(raw_error = %error_msg, "Database timeout or lock contention");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

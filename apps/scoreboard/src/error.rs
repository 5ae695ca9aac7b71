use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

/// Error returned by every public scoreboard operation.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { code, .. } => *code,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Db { detail, .. }
            | AppError::Config { detail }
            | AppError::Internal { detail, .. } => detail,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Db {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::Internal,
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidPlayerCount | ValidationKind::DuplicateColor => {
                        ErrorCode::InvalidPlayerCount
                    }
                    ValidationKind::InvalidDice => ErrorCode::InvalidDice,
                    ValidationKind::InvalidColor => ErrorCode::InvalidColor,
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Turn => ErrorCode::TurnNotFound,
                    NotFoundKind::Picture => ErrorCode::PictureNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::GameCompleted => ErrorCode::GameCompleted,
                    ConflictKind::GameOngoing => ErrorCode::GameOngoing,
                    ConflictKind::NoTurnsToAbort => ErrorCode::NoTurnsToAbort,
                    ConflictKind::Other(ref s) if s == "Unique" => ErrorCode::UniqueViolation,
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::db(ErrorCode::DbUnavailable, detail),
                InfraErrorKind::Timeout => AppError::db(ErrorCode::DbTimeout, detail),
                InfraErrorKind::DataCorruption => AppError::Internal {
                    code: ErrorCode::DataCorruption,
                    detail,
                },
                _ => AppError::db(ErrorCode::DbError, detail),
            },
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(DomainError::from(e))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_conflicts_keep_their_codes() {
        let err: AppError = DomainError::game_completed(3).into();
        assert_eq!(err.code(), ErrorCode::GameCompleted);
        assert_eq!(err.detail(), "Game 3 is already completed");

        let err: AppError =
            DomainError::conflict(ConflictKind::NoTurnsToAbort, "no turns").into();
        assert_eq!(err.code(), ErrorCode::NoTurnsToAbort);
    }

    #[test]
    fn duplicate_color_reports_invalid_player_count() {
        let err: AppError =
            DomainError::validation(ValidationKind::DuplicateColor, "red twice").into();
        assert_eq!(err.code(), ErrorCode::InvalidPlayerCount);
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn data_corruption_is_internal() {
        let err: AppError = DomainError::data_corruption("ring broken").into();
        assert_eq!(err.code(), ErrorCode::DataCorruption);
        assert_eq!(err.to_string(), "Internal error: ring broken");
    }
}

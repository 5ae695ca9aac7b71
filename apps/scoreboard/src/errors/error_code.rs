//! Error codes for the scoreboard engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input Validation
    /// Fewer than 2 or more than 6 players, or duplicate colors
    InvalidPlayerCount,
    /// Die value outside its face set
    InvalidDice,
    /// Unknown palette color
    InvalidColor,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// Turn not found
    TurnNotFound,
    /// Board picture not found
    PictureNotFound,
    /// General not found error
    NotFound,

    // Lifecycle Conflicts
    /// Mutation attempted on a completed game
    GameCompleted,
    /// Operation requires a completed game
    GameOngoing,
    /// No turn exists to abort
    NoTurnsToAbort,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Unique constraint violation
    UniqueViolation,
    /// Data corruption detected
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidDice => "INVALID_DICE",
            Self::InvalidColor => "INVALID_COLOR",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::TurnNotFound => "TURN_NOT_FOUND",
            Self::PictureNotFound => "PICTURE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameCompleted => "GAME_COMPLETED",
            Self::GameOngoing => "GAME_ONGOING",
            Self::NoTurnsToAbort => "NO_TURNS_TO_ABORT",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(
            ErrorCode::InvalidPlayerCount.as_str(),
            "INVALID_PLAYER_COUNT"
        );
        assert_eq!(ErrorCode::InvalidDice.as_str(), "INVALID_DICE");
        assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
        assert_eq!(ErrorCode::GameCompleted.as_str(), "GAME_COMPLETED");
        assert_eq!(ErrorCode::NoTurnsToAbort.as_str(), "NO_TURNS_TO_ABORT");
        assert_eq!(ErrorCode::DataCorruption.as_str(), "DATA_CORRUPTION");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::GameOngoing), "GAME_ONGOING");
        assert_eq!(format!("{}", ErrorCode::DbTimeout), "DB_TIMEOUT");
    }
}

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::db::{DbKind, DbSettings};
pub use domain::{
    format_duration_ms, Clock, Color, Dice, DieNumber, EventDie, GameSnapshot, GameStatus,
    ManualClock, NewPlayer, SystemClock,
};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::state::build_state;
pub use services::scoreboard::Scoreboard;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scoreboard_test_support::logging::init();
}

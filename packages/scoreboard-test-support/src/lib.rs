//! Scoreboard test support utilities
//!
//! Shared by the scoreboard integration tests: one-time logging
//! initialization and helpers for generating unique test data.

pub mod logging;
pub mod unique_helpers;

//! Infrastructure layer - database, state management, and error handling.

pub mod db;
pub mod db_errors;
pub mod schema_guard;
pub mod state;

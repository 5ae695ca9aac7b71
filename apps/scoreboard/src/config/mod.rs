pub mod db;
pub mod runtime;

use std::env;

use crate::error::AppError;

/// Read an optional environment variable, treating empty values as unset.
pub(crate) fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable with `FromStr`, reporting bad values as config errors.
pub(crate) fn parse_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match opt_var(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::config(format!("Invalid value '{raw}' for {name}: {e}"))
        }),
    }
}

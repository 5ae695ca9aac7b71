//! Process-level switches: log format and transaction policy.

use super::{opt_var, parse_var};
use crate::db::txn_policy::TxnPolicy;
use crate::error::AppError;

pub const ENV_LOG_JSON: &str = "SCOREBOARD_LOG_JSON";
pub const ENV_TXN_POLICY: &str = "SCOREBOARD_TXN_POLICY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeSettings {
    pub log_json: bool,
    pub txn_policy: TxnPolicy,
}

impl RuntimeSettings {
    pub fn from_env() -> Result<Self, AppError> {
        let log_json = match opt_var(ENV_LOG_JSON) {
            None => false,
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::config(format!("Invalid value '{raw}' for {ENV_LOG_JSON}"))
            })?,
        };
        let txn_policy = parse_var::<TxnPolicy>(ENV_TXN_POLICY)?.unwrap_or_default();
        Ok(Self {
            log_json,
            txn_policy,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

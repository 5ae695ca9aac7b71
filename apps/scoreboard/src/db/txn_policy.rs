use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Whether successful transactions are committed or rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnPolicy {
    /// Commit the transaction when the operation succeeds (default behavior)
    #[default]
    CommitOnOk,
    /// Roll back even on success (dry runs)
    RollbackOnOk,
}

impl FromStr for TxnPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "commit" | "commit-on-ok" => Ok(TxnPolicy::CommitOnOk),
            "rollback" | "rollback-on-ok" => Ok(TxnPolicy::RollbackOnOk),
            other => Err(format!("unknown txn policy '{other}' (expected commit or rollback)")),
        }
    }
}

impl fmt::Display for TxnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TxnPolicy::CommitOnOk => "commit",
            TxnPolicy::RollbackOnOk => "rollback",
        })
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Get the current transaction policy.
///
/// Returns `CommitOnOk` if no policy has been set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or_default()
}

/// Set the transaction policy for the process.
///
/// Only the first call has any effect.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("commit".parse::<TxnPolicy>().unwrap(), TxnPolicy::CommitOnOk);
        assert_eq!(
            "Rollback".parse::<TxnPolicy>().unwrap(),
            TxnPolicy::RollbackOnOk
        );
        assert!("later".parse::<TxnPolicy>().is_err());
        assert_eq!(TxnPolicy::RollbackOnOk.to_string(), "rollback");
    }
}

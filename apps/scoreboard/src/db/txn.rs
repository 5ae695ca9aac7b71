use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::txn_policy::{self, TxnPolicy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future borrowed from the transaction handed to a `with_txn` closure.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'c>>;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the state's connection, runs the closure, then
/// applies the process [`TxnPolicy`] on `Ok` and rolls back on `Err`. The
/// closure's error is returned unchanged even if the rollback itself fails.
///
/// ```ignore
/// let game = with_txn(&state, |txn| Box::pin(async move {
///     Ok(games::require_game(txn, game_id).await?)
/// })).await?;
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R> + Send,
{
    let txn = state.db().begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            TxnPolicy::RollbackOnOk => {
                debug!("txn policy rollback-on-ok: discarding successful transaction");
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

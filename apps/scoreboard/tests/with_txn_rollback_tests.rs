//! Rollback policy: this binary includes `support/test_init.rs`, so
//! successful operations return their results but persist nothing.
#[path = "support/test_init.rs"]
mod test_init;

mod common;

use common::{alice_and_bob, memory_board};
use scoreboard::db::txn_policy::{current, TxnPolicy};
use scoreboard::AppError;

#[tokio::test]
async fn policy_is_rollback() {
    assert_eq!(current(), TxnPolicy::RollbackOnOk);
}

#[tokio::test]
async fn successful_start_is_not_persisted() -> Result<(), AppError> {
    let t = memory_board().await?;

    let snap = t.board.start_game(alice_and_bob()).await?;
    assert_eq!(snap.players.len(), 2);

    assert!(t.board.get_all_games().await?.is_empty());
    let err = t.board.get_game(snap.id()).await.unwrap_err();
    assert_eq!(err.code(), scoreboard::ErrorCode::GameNotFound);
    Ok(())
}

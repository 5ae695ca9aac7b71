//! Default commit policy: binaries without `support/test_init.rs` persist writes.

mod common;

use common::{memory_board, T0};
use scoreboard::adapters::games_sea::{self, GameCreate};
use scoreboard::db::txn_policy::{current, TxnPolicy};
use scoreboard::db::with_txn;
use scoreboard::{AppError, ErrorCode};

#[tokio::test]
async fn default_policy_is_commit() {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
}

#[tokio::test]
async fn ok_commits() -> Result<(), AppError> {
    let t = memory_board().await?;
    let state = t.board.state();

    let id = with_txn(state, |txn| {
        Box::pin(async move {
            let game = games_sea::create_game(txn, GameCreate::new(T0)).await?;
            Ok(game.id)
        })
    })
    .await?;

    let found = with_txn(state, move |txn| {
        Box::pin(async move { Ok(games_sea::find_by_id(txn, id).await?) })
    })
    .await?;
    assert!(found.is_some());
    Ok(())
}

#[tokio::test]
async fn err_rolls_back_and_keeps_the_error() -> Result<(), AppError> {
    let t = memory_board().await?;
    let state = t.board.state();

    let err = with_txn(state, |txn| {
        Box::pin(async move {
            games_sea::create_game(txn, GameCreate::new(T0)).await?;
            Err::<(), _>(AppError::internal("boom"))
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(err.detail(), "boom");

    let games = with_txn(state, |txn| {
        Box::pin(async move { Ok(games_sea::find_all(txn).await?) })
    })
    .await?;
    assert!(games.is_empty());
    Ok(())
}

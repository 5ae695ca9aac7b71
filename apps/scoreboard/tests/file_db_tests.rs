//! File-backed stores survive reopening.

mod common;

use std::sync::Arc;

use common::{alice_and_bob, dice, T0};
use scoreboard::{build_state, AppError, DbSettings, ManualClock, Scoreboard};

async fn open(path: &std::path::Path, clock: &ManualClock) -> Result<Scoreboard, AppError> {
    let state = build_state()
        .with_settings(DbSettings::file(path))
        .with_clock(Arc::new(clock.clone()))
        .build()
        .await?;
    Ok(Scoreboard::new(state))
}

#[tokio::test]
async fn games_persist_across_reopen() -> Result<(), AppError> {
    let dir = tempfile::tempdir().map_err(|e| AppError::internal(e.to_string()))?;
    let path = dir.path().join("scoreboard.db");
    let clock = ManualClock::new(T0);

    let game_id = {
        let board = open(&path, &clock).await?;
        let game_id = board.start_game(alice_and_bob()).await?.id();
        clock.advance_ms(4_000);
        board.record_turn(game_id, dice(5, 2, "green")).await?;
        game_id
    };

    // a second open runs migrations again; they must be a no-op
    let board = open(&path, &clock).await?;
    let snap = board.get_game(game_id).await?;
    assert_eq!(snap.turns.len(), 1);
    assert_eq!(snap.turns[0].duration_ms, 4_000);
    assert_eq!(snap.game.total_duration_ms, 4_000);
    assert_eq!(board.get_all_games().await?.len(), 1);
    Ok(())
}

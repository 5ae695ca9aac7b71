//! Store-level constraints and how their failures surface as error codes.

mod common;

use common::{alice_and_bob, memory_board, T0};
use scoreboard::adapters::games_sea::{self, GameCreate};
use scoreboard::adapters::players_sea::{self, PlayerCreate};
use scoreboard::adapters::turns_sea::{self, TurnCreate};
use scoreboard::db::with_txn;
use scoreboard::{AppError, Color, ErrorCode, EventDie};

#[tokio::test]
async fn duplicate_color_in_one_game_is_rejected_by_the_store() -> Result<(), AppError> {
    let t = memory_board().await?;

    let err = with_txn(t.board.state(), |txn| {
        Box::pin(async move {
            let game = games_sea::create_game(txn, GameCreate::new(T0)).await?;
            for name in ["Ann", "Ben"] {
                players_sea::create_player(
                    txn,
                    PlayerCreate {
                        game_id: game.id,
                        name: name.into(),
                        color: Color::Green,
                    },
                )
                .await?;
            }
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidPlayerCount);
    Ok(())
}

#[tokio::test]
async fn same_color_in_different_games_is_fine() -> Result<(), AppError> {
    let t = memory_board().await?;
    t.board.start_game(alice_and_bob()).await?;
    t.board.start_game(alice_and_bob()).await?;
    assert_eq!(t.board.get_all_games().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn out_of_range_die_hits_the_check_constraint() -> Result<(), AppError> {
    let t = memory_board().await?;
    let snap = t.board.start_game(alice_and_bob()).await?;
    let (game_id, player_id) = (snap.id(), snap.players[0].id);

    let err = with_txn(t.board.state(), move |txn| {
        Box::pin(async move {
            turns_sea::create_turn(
                txn,
                TurnCreate {
                    game_id,
                    player_id,
                    white_die: 7,
                    red_die: 1,
                    event_die: EventDie::Yellow,
                    duration_ms: 0,
                },
            )
            .await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::ValidationError);
    Ok(())
}

#[tokio::test]
async fn player_of_missing_game_violates_foreign_key() -> Result<(), AppError> {
    let t = memory_board().await?;

    let err = with_txn(t.board.state(), |txn| {
        Box::pin(async move {
            players_sea::create_player(
                txn,
                PlayerCreate {
                    game_id: 999,
                    name: "Ghost".into(),
                    color: Color::White,
                },
            )
            .await?;
            Ok(())
        })
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotFound);
    Ok(())
}

#[tokio::test]
async fn broken_ring_is_reported_as_corruption() -> Result<(), AppError> {
    let t = memory_board().await?;
    let snap = t.board.start_game(alice_and_bob()).await?;
    let game_id = snap.id();
    let first = snap.players[0].id;

    // point the first seat at itself so the second seat drops out of the ring
    with_txn(t.board.state(), move |txn| {
        Box::pin(async move { Ok(players_sea::set_next_player(txn, first, first).await?) })
    })
    .await?;

    let err = t.board.get_game(game_id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataCorruption);
    Ok(())
}

#[tokio::test]
async fn successor_of_missing_player_is_not_found() -> Result<(), AppError> {
    let t = memory_board().await?;

    let err = with_txn(t.board.state(), |txn| {
        Box::pin(async move { Ok(players_sea::set_next_player(txn, 4242, 1).await?) })
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotFound);
    Ok(())
}

//! Async operation set over an [`AppState`]: one transaction per call.

use tracing::instrument;

use crate::db::txn::with_txn;
use crate::domain::dice::Dice;
use crate::domain::ring::NewPlayer;
use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::repos::games::{self, Game};
use crate::repos::pictures::{self, BoardPicture};
use crate::repos::turns::Turn;
use crate::services::game_flow::GameFlowService;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

/// Entry point for callers: every mutating call runs in its own transaction
/// with `now` taken from the state's clock.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    state: AppState,
}

impl Scoreboard {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[instrument(skip_all, fields(players = roster.len()))]
    pub async fn start_game(&self, roster: Vec<NewPlayer>) -> Result<GameSnapshot, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                let (game, _) = GameFlowService::new().start_game(txn, &roster, now).await?;
                GameService::new().load_snapshot(txn, game.id).await
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn record_turn(&self, game_id: i64, dice: Dice) -> Result<Turn, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                GameFlowService::new()
                    .record_turn(txn, game_id, dice, now)
                    .await
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn complete_game(&self, game_id: i64, dice: Dice) -> Result<Game, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                GameFlowService::new()
                    .complete_game(txn, game_id, dice, now)
                    .await
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn abort_last_turn(&self, game_id: i64) -> Result<Turn, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                GameFlowService::new()
                    .abort_last_turn(txn, game_id, now)
                    .await
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn pause_game(&self, game_id: i64) -> Result<bool, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move { GameFlowService::new().pause_game(txn, game_id, now).await })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn resume_game(&self, game_id: i64) -> Result<bool, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move { GameFlowService::new().resume_game(txn, game_id, now).await })
        })
        .await
    }

    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn upload_board_picture(
        &self,
        game_id: i64,
        content_type: String,
        data: Vec<u8>,
    ) -> Result<BoardPicture, AppError> {
        let now = self.state.now();
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                GameFlowService::new()
                    .upload_board_picture(txn, game_id, &content_type, data, now)
                    .await
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_board_picture(&self, game_id: i64) -> Result<bool, AppError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                GameFlowService::new()
                    .delete_board_picture(txn, game_id)
                    .await
            })
        })
        .await
    }

    pub async fn get_board_picture(&self, game_id: i64) -> Result<Option<BoardPicture>, AppError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move {
                games::require_game(txn, game_id).await?;
                Ok(pictures::find_by_game(txn, game_id).await?)
            })
        })
        .await
    }

    /// Game with players and turns, read in one transaction.
    pub async fn get_game(&self, game_id: i64) -> Result<GameSnapshot, AppError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { GameService::new().load_snapshot(txn, game_id).await })
        })
        .await
    }

    pub async fn get_all_games(&self) -> Result<Vec<GameSnapshot>, AppError> {
        with_txn(&self.state, |txn| {
            Box::pin(async move { GameService::new().list_snapshots(txn).await })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: i64) -> Result<(), AppError> {
        with_txn(&self.state, move |txn| {
            Box::pin(async move { GameService::new().delete_game(txn, game_id).await })
        })
        .await
    }
}

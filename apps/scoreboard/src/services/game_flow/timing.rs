use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use super::GameFlowService;
use crate::error::AppError;
use crate::repos::games::{self, GameUpdate};

impl GameFlowService {
    /// Freeze the open turn's clock. Returns false if it was already paused.
    pub async fn pause_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let game = self.require_ongoing(txn, game_id).await?;
        let mut clock = game.turn_clock();
        if !clock.pause(now) {
            debug!(game_id, "Pause ignored: already paused");
            return Ok(false);
        }

        games::update_game(
            txn,
            GameUpdate::new(game_id)
                .with_paused(true)
                .with_turn_clock(clock.accumulated_ms, clock.since),
        )
        .await?;

        info!(game_id, accumulated_ms = clock.accumulated_ms, "Game paused");
        Ok(true)
    }

    /// Restart the open turn's clock. Returns false if it was not paused.
    pub async fn resume_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        now: OffsetDateTime,
    ) -> Result<bool, AppError> {
        let game = self.require_ongoing(txn, game_id).await?;
        let mut clock = game.turn_clock();
        if !clock.resume(now) {
            debug!(game_id, "Resume ignored: not paused");
            return Ok(false);
        }

        games::update_game(
            txn,
            GameUpdate::new(game_id)
                .with_paused(false)
                .with_turn_clock(clock.accumulated_ms, clock.since),
        )
        .await?;

        info!(game_id, accumulated_ms = clock.accumulated_ms, "Game resumed");
        Ok(true)
    }
}

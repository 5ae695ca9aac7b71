use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::accountant::TurnClock;
use crate::domain::dice::Dice;
use crate::domain::ring::{validate_roster, NewPlayer};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{self, Game, GameUpdate};
use crate::repos::pictures;
use crate::repos::players::{self, Player};
use crate::repos::turns::{self, Turn};

impl GameFlowService {
    /// Create a running game and wire its player ring.
    ///
    /// The first seat's turn window opens at `now`.
    pub async fn start_game(
        &self,
        txn: &DatabaseTransaction,
        roster: &[NewPlayer],
        now: OffsetDateTime,
    ) -> Result<(Game, Vec<Player>), AppError> {
        validate_roster(roster)?;

        let game = games::create_game(txn, now).await?;
        let seated = players::create_ring(txn, game.id, roster).await?;

        info!(
            game_id = game.id,
            players = seated.len(),
            first_player_id = seated.first().map(|p| p.id),
            "Game started"
        );
        Ok((game, seated))
    }

    /// Close the open turn for the current player and open the next one.
    pub async fn record_turn(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        dice: Dice,
        now: OffsetDateTime,
    ) -> Result<Turn, AppError> {
        let game = self.require_ongoing(txn, game_id).await?;
        let (turn, clock) = self.close_current_turn(txn, &game, dice, now).await?;

        games::update_game(
            txn,
            GameUpdate::new(game_id)
                .with_total_duration_ms(game.total_duration_ms.saturating_add(turn.duration_ms))
                .with_turn_clock(clock.accumulated_ms, clock.since),
        )
        .await?;

        info!(
            game_id,
            turn_id = turn.id,
            player_id = turn.player_id,
            duration_ms = turn.duration_ms,
            dice = %turn.dice,
            "Turn recorded"
        );
        Ok(turn)
    }

    /// Record the final turn and end the game with its player as the winner.
    pub async fn complete_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        dice: Dice,
        now: OffsetDateTime,
    ) -> Result<Game, AppError> {
        let game = self.require_ongoing(txn, game_id).await?;
        let (turn, clock) = self.close_current_turn(txn, &game, dice, now).await?;

        let completed = games::update_game(
            txn,
            GameUpdate::new(game_id)
                .with_total_duration_ms(game.total_duration_ms.saturating_add(turn.duration_ms))
                .with_turn_clock(clock.accumulated_ms, clock.since)
                .with_paused(true)
                .completed(now, turn.player_id),
        )
        .await?;

        info!(
            game_id,
            turn_id = turn.id,
            winner_player_id = turn.player_id,
            total_duration_ms = completed.total_duration_ms,
            "Game completed"
        );
        Ok(completed)
    }

    /// Delete the most recent turn and hand the clock back to its owner.
    ///
    /// The removed turn's duration becomes the running accumulator again. A
    /// completed game is reopened and loses its board picture.
    pub async fn abort_last_turn(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        now: OffsetDateTime,
    ) -> Result<Turn, AppError> {
        let game = games::require_game(txn, game_id).await?;
        let last = turns::find_last_by_game(txn, game_id)
            .await?
            .ok_or_else(|| {
                DomainError::conflict(
                    ConflictKind::NoTurnsToAbort,
                    format!("Game {game_id} has no turns to abort"),
                )
            })?;

        turns::delete_turn(txn, last.id).await?;

        let clock = TurnClock::reopen(last.duration_ms, now);
        let mut update = GameUpdate::new(game_id)
            .with_total_duration_ms((game.total_duration_ms - last.duration_ms).max(0))
            .with_turn_clock(clock.accumulated_ms, clock.since)
            .with_paused(clock.is_paused);

        let was_completed = game.is_completed();
        if was_completed {
            update = update.reopened();
            if pictures::delete_by_game(txn, game_id).await? {
                debug!(game_id, "Board picture removed on reopen");
            }
        }
        games::update_game(txn, update).await?;

        info!(
            game_id,
            turn_id = last.id,
            player_id = last.player_id,
            reopened = was_completed,
            "Last turn aborted"
        );
        Ok(last)
    }

    /// Append the closing turn for whoever is up and return the reset clock.
    async fn close_current_turn(
        &self,
        txn: &DatabaseTransaction,
        game: &Game,
        dice: Dice,
        now: OffsetDateTime,
    ) -> Result<(Turn, TurnClock), AppError> {
        let ring = players::load_ring(txn, game.id).await?;
        let last = turns::find_last_by_game(txn, game.id).await?;
        let current_player_id = ring.up_next(last.map(|t| t.player_id))?;

        let mut clock = game.turn_clock();
        let duration_ms = clock.close_interval(now);
        let turn = turns::append_turn(txn, game.id, current_player_id, dice, duration_ms).await?;

        Ok((turn, clock))
    }
}

//! Game repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::accountant::TurnClock;
use crate::entities::games;
use crate::errors::domain::DomainError;

pub use games_adapter::GameUpdate;

/// Game domain model, converted from `games::Model` when loaded through repos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: i64,
    pub is_paused: bool,
    pub total_duration_ms: i64,
    pub current_turn_duration_ms: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub current_turn_duration_since: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    pub winner_player_id: Option<i64>,
}

impl Game {
    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    /// The open turn's accumulator as stored on the row.
    pub fn turn_clock(&self) -> TurnClock {
        TurnClock {
            accumulated_ms: self.current_turn_duration_ms,
            since: self.current_turn_duration_since,
            is_paused: self.is_paused,
        }
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            is_paused: model.is_paused,
            total_duration_ms: model.total_duration_ms,
            current_turn_duration_ms: model.current_turn_duration_ms,
            current_turn_duration_since: model.current_turn_duration_since,
            start_time: model.start_time,
            end_time: model.end_time,
            winner_player_id: model.winner_player_id,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Find game by ID or fail with `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Ok(Game::from(game))
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Game>, DomainError> {
    let games = games_adapter::find_all(conn).await?;
    Ok(games.into_iter().map(Game::from).collect())
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    start_time: OffsetDateTime,
) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(txn, games_adapter::GameCreate::new(start_time)).await?;
    Ok(Game::from(game))
}

pub async fn update_game(txn: &DatabaseTransaction, dto: GameUpdate) -> Result<Game, DomainError> {
    let game = games_adapter::update_game(txn, dto).await?;
    Ok(Game::from(game))
}

/// Delete the game row; fails with `NotFound(Game)` when nothing was removed.
pub async fn delete_game(txn: &DatabaseTransaction, game_id: i64) -> Result<(), DomainError> {
    let removed = games_adapter::delete_game(txn, game_id).await?;
    if removed == 0 {
        return Err(DomainError::game_not_found(game_id));
    }
    Ok(())
}

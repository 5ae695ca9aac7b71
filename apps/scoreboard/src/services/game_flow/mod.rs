//! Game lifecycle service - bridges the pure domain rules with DB persistence.
//!
//! Every method takes the caller's transaction and the instant to act at, so
//! a whole transition commits or rolls back as one unit.

mod lifecycle;
mod pictures;
mod timing;

use sea_orm::ConnectionTrait;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::repos::games::{self, Game};

/// Game lifecycle service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    /// Load a game that still accepts turns, or fail with `GameCompleted`.
    async fn require_ongoing<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Game, AppError> {
        let game = games::require_game(conn, game_id).await?;
        if game.is_completed() {
            return Err(DomainError::game_completed(game_id).into());
        }
        Ok(game)
    }
}

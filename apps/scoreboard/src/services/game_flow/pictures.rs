use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::info;

use super::GameFlowService;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{self, Game};
use crate::repos::pictures::{self, BoardPicture};

impl GameFlowService {
    /// Attach a picture of the final board, replacing any earlier one.
    pub async fn upload_board_picture(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        content_type: &str,
        data: Vec<u8>,
        now: OffsetDateTime,
    ) -> Result<BoardPicture, AppError> {
        self.require_completed(txn, game_id).await?;

        let bytes = data.len();
        let picture = pictures::save(txn, game_id, content_type, data, now).await?;

        info!(game_id, picture_id = picture.id, bytes, "Board picture uploaded");
        Ok(picture)
    }

    /// Remove the game's picture. Returns whether one existed.
    pub async fn delete_board_picture(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<bool, AppError> {
        self.require_completed(txn, game_id).await?;

        let removed = pictures::delete_by_game(txn, game_id).await?;
        if removed {
            info!(game_id, "Board picture deleted");
        }
        Ok(removed)
    }

    async fn require_completed(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<Game, AppError> {
        let game = games::require_game(txn, game_id).await?;
        if !game.is_completed() {
            return Err(DomainError::conflict(
                ConflictKind::GameOngoing,
                format!("Game {game_id} is still ongoing"),
            )
            .into());
        }
        Ok(game)
    }
}

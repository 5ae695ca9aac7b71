//! Read models and removal of whole games.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::snapshot::GameSnapshot;
use crate::error::AppError;
use crate::repos::games::{self, Game};
use crate::repos::{pictures, players, turns};

/// Game read/delete service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Game + ring-ordered players + newest-first turns.
    pub async fn load_snapshot<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<GameSnapshot, AppError> {
        let game = games::require_game(conn, game_id).await?;
        self.assemble(conn, game).await
    }

    /// Every game, most recently started first.
    pub async fn list_snapshots<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<GameSnapshot>, AppError> {
        let all = games::find_all(conn).await?;
        let mut snapshots = Vec::with_capacity(all.len());
        for game in all {
            snapshots.push(self.assemble(conn, game).await?);
        }
        Ok(snapshots)
    }

    /// Remove a game with its players, turns and picture.
    pub async fn delete_game(&self, txn: &DatabaseTransaction, game_id: i64) -> Result<(), AppError> {
        games::require_game(txn, game_id).await?;

        let had_picture = pictures::delete_by_game(txn, game_id).await?;
        let turns_removed = turns::delete_by_game(txn, game_id).await?;
        let players_removed = players::delete_by_game(txn, game_id).await?;
        games::delete_game(txn, game_id).await?;

        info!(
            game_id,
            turns_removed, players_removed, had_picture, "Game deleted"
        );
        Ok(())
    }

    async fn assemble<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game: Game,
    ) -> Result<GameSnapshot, AppError> {
        let seated = players::find_all_by_game(conn, game.id).await?;
        let ledger = turns::find_all_by_game(conn, game.id).await?;
        let has_picture = pictures::exists_for_game(conn, game.id).await?;
        Ok(GameSnapshot::assemble(game, seated, ledger, has_picture)?)
    }
}

//! Turn ledger repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::turns_sea as turns_adapter;
use crate::domain::dice::{Dice, DieNumber};
use crate::entities::turns;
use crate::errors::domain::DomainError;

/// A closed turn. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub id: i64,
    pub game_id: i64,
    pub player_id: i64,
    pub dice: Dice,
    pub duration_ms: i64,
}

impl TryFrom<turns::Model> for Turn {
    type Error = DomainError;

    fn try_from(model: turns::Model) -> Result<Self, Self::Error> {
        let corrupt = |_: DomainError| {
            DomainError::data_corruption(format!(
                "Turn {} has out-of-range dice {}/{}",
                model.id, model.white_die, model.red_die
            ))
        };
        let white = DieNumber::new(model.white_die).map_err(corrupt)?;
        let red = DieNumber::new(model.red_die).map_err(corrupt)?;
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            player_id: model.player_id,
            dice: Dice::new(white, red, model.event_die),
            duration_ms: model.duration_ms,
        })
    }
}

pub async fn append_turn(
    txn: &DatabaseTransaction,
    game_id: i64,
    player_id: i64,
    dice: Dice,
    duration_ms: i64,
) -> Result<Turn, DomainError> {
    let model = turns_adapter::create_turn(
        txn,
        turns_adapter::TurnCreate {
            game_id,
            player_id,
            white_die: dice.white.into(),
            red_die: dice.red.into(),
            event_die: dice.event,
            duration_ms,
        },
    )
    .await?;
    Turn::try_from(model)
}

pub async fn find_last_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Turn>, DomainError> {
    turns_adapter::find_last_by_game(conn, game_id)
        .await?
        .map(Turn::try_from)
        .transpose()
}

/// Ledger of a game, most recent first.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Turn>, DomainError> {
    turns_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Turn::try_from)
        .collect()
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, DomainError> {
    Ok(turns_adapter::count_by_game(conn, game_id).await?)
}

pub async fn delete_turn(txn: &DatabaseTransaction, turn_id: i64) -> Result<(), DomainError> {
    Ok(turns_adapter::delete_turn(txn, turn_id).await?)
}

pub async fn delete_by_game(txn: &DatabaseTransaction, game_id: i64) -> Result<u64, DomainError> {
    Ok(turns_adapter::delete_by_game(txn, game_id).await?)
}

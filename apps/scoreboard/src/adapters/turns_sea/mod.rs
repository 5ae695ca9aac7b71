//! SeaORM adapter for the turn ledger.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::dice::EventDie;
use crate::entities::turns;

/// DTO for appending one closed turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub white_die: i16,
    pub red_die: i16,
    pub event_die: EventDie,
    pub duration_ms: i64,
}

pub async fn create_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TurnCreate,
) -> Result<turns::Model, sea_orm::DbErr> {
    let turn = turns::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        white_die: Set(dto.white_die),
        red_die: Set(dto.red_die),
        event_die: Set(dto.event_die),
        duration_ms: Set(dto.duration_ms),
    };

    turn.insert(conn).await
}

/// Most recent turn of a game (highest id), if any.
pub async fn find_last_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<turns::Model>, sea_orm::DbErr> {
    turns::Entity::find()
        .filter(turns::Column::GameId.eq(game_id))
        .order_by_desc(turns::Column::Id)
        .one(conn)
        .await
}

/// Whole ledger of a game, most recent first.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<turns::Model>, sea_orm::DbErr> {
    turns::Entity::find()
        .filter(turns::Column::GameId.eq(game_id))
        .order_by_desc(turns::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    turns::Entity::find()
        .filter(turns::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

pub async fn delete_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    turn_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = turns::Entity::delete_by_id(turn_id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "Turn {turn_id} not found"
        )));
    }
    Ok(())
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = turns::Entity::delete_many()
        .filter(turns::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

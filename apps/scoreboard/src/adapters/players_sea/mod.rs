//! SeaORM adapter for the players of a game.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::domain::colors::Color;
use crate::entities::players;

/// DTO for seating one player. The successor is wired afterwards.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub name: String,
    pub color: Color,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerCreate,
) -> Result<players::Model, sea_orm::DbErr> {
    let player = players::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        name: Set(dto.name),
        color: Set(dto.color),
        next_player_id: Set(None),
    };

    player.insert(conn).await
}

pub async fn set_next_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    next_player_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = players::Entity::update_many()
        .col_expr(players::Column::NextPlayerId, Expr::value(next_player_id))
        .filter(players::Column::Id.eq(player_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "Player {player_id} not found"
        )));
    }
    Ok(())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

/// All players of a game in seating (insertion) order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::GameId.eq(game_id))
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_many()
        .filter(players::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

fn game_not_found(game_id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured `GAME_NOT_FOUND:{id}` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

/// All games, most recently started first.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_desc(games::Column::StartTime)
        .order_by_desc(games::Column::Id)
        .all(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: NotSet,
        is_paused: Set(false),
        total_duration_ms: Set(0),
        current_turn_duration_ms: Set(0),
        current_turn_duration_since: Set(dto.start_time),
        start_time: Set(dto.start_time),
        end_time: Set(None),
        winner_player_id: Set(None),
    };

    game_active.insert(conn).await
}

/// Apply the columns set in `dto`, then refetch.
pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    if dto.is_empty() {
        return require_game(conn, dto.id).await;
    }

    let mut update = games::Entity::update_many();
    if let Some(paused) = dto.is_paused {
        update = update.col_expr(games::Column::IsPaused, Expr::value(paused));
    }
    if let Some(total) = dto.total_duration_ms {
        update = update.col_expr(games::Column::TotalDurationMs, Expr::value(total));
    }
    if let Some(accumulated) = dto.current_turn_duration_ms {
        update = update.col_expr(games::Column::CurrentTurnDurationMs, Expr::value(accumulated));
    }
    if let Some(since) = dto.current_turn_duration_since {
        update = update.col_expr(games::Column::CurrentTurnDurationSince, Expr::value(since));
    }
    if let Some(end_time) = dto.end_time {
        update = update.col_expr(games::Column::EndTime, Expr::value(end_time));
    }
    if let Some(winner) = dto.winner_player_id {
        update = update.col_expr(games::Column::WinnerPlayerId, Expr::value(winner));
    }

    let result = update
        .filter(games::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(game_not_found(dto.id));
    }

    require_game(conn, dto.id).await
}

/// Delete the game row. Returns the number of rows removed.
pub async fn delete_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = games::Entity::delete_by_id(game_id).exec(conn).await?;
    Ok(result.rows_affected)
}

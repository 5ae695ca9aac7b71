//! SeaORM adapter for board pictures (at most one per game).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    PaginatorTrait, QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::pictures;

#[derive(Debug, Clone)]
pub struct PictureUpsert {
    pub game_id: i64,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: OffsetDateTime,
}

pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<pictures::Model>, sea_orm::DbErr> {
    pictures::Entity::find()
        .filter(pictures::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

pub async fn exists_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let count = pictures::Entity::find()
        .filter(pictures::Column::GameId.eq(game_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Insert the game's picture, or overwrite the one already attached.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PictureUpsert,
) -> Result<pictures::Model, sea_orm::DbErr> {
    match find_by_game(conn, dto.game_id).await? {
        Some(existing) => {
            let mut active = existing.into_active_model();
            active.content_type = Set(dto.content_type);
            active.data = Set(dto.data);
            active.created_at = Set(dto.created_at);
            active.update(conn).await
        }
        None => {
            let picture = pictures::ActiveModel {
                id: NotSet,
                game_id: Set(dto.game_id),
                content_type: Set(dto.content_type),
                data: Set(dto.data),
                created_at: Set(dto.created_at),
            };
            picture.insert(conn).await
        }
    }
}

pub async fn delete_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = pictures::Entity::delete_many()
        .filter(pictures::Column::GameId.eq(game_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

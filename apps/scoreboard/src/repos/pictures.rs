//! Board picture repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::pictures_sea as pictures_adapter;
use crate::entities::pictures;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPicture {
    pub id: i64,
    pub game_id: i64,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: OffsetDateTime,
}

impl From<pictures::Model> for BoardPicture {
    fn from(model: pictures::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            content_type: model.content_type,
            data: model.data,
            created_at: model.created_at,
        }
    }
}

pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<BoardPicture>, DomainError> {
    let picture = pictures_adapter::find_by_game(conn, game_id).await?;
    Ok(picture.map(BoardPicture::from))
}

pub async fn exists_for_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    Ok(pictures_adapter::exists_for_game(conn, game_id).await?)
}

pub async fn save(
    txn: &DatabaseTransaction,
    game_id: i64,
    content_type: impl Into<String>,
    data: Vec<u8>,
    created_at: OffsetDateTime,
) -> Result<BoardPicture, DomainError> {
    let picture = pictures_adapter::upsert(
        txn,
        pictures_adapter::PictureUpsert {
            game_id,
            content_type: content_type.into(),
            data,
            created_at,
        },
    )
    .await?;
    Ok(BoardPicture::from(picture))
}

/// Remove the game's picture. Returns whether one existed.
pub async fn delete_by_game(txn: &DatabaseTransaction, game_id: i64) -> Result<bool, DomainError> {
    let removed = pictures_adapter::delete_by_game(txn, game_id).await?;
    Ok(removed > 0)
}

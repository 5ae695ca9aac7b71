use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "is_paused")]
    pub is_paused: bool,
    #[sea_orm(column_name = "total_duration_ms")]
    pub total_duration_ms: i64,
    #[sea_orm(column_name = "current_turn_duration_ms")]
    pub current_turn_duration_ms: i64,
    #[sea_orm(column_name = "current_turn_duration_since")]
    pub current_turn_duration_since: OffsetDateTime,
    #[sea_orm(column_name = "start_time")]
    pub start_time: OffsetDateTime,
    #[sea_orm(column_name = "end_time")]
    pub end_time: Option<OffsetDateTime>,
    #[sea_orm(column_name = "winner_player_id")]
    pub winner_player_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::players::Entity")]
    Players,
    #[sea_orm(has_many = "super::turns::Entity")]
    Turns,
    #[sea_orm(has_one = "super::pictures::Entity")]
    Picture,
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

impl Related<super::turns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turns.def()
    }
}

impl Related<super::pictures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Picture.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

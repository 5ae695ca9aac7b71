use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    IsPaused,
    TotalDurationMs,
    CurrentTurnDurationMs,
    CurrentTurnDurationSince,
    StartTime,
    EndTime,
    WinnerPlayerId,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    Name,
    Color,
    NextPlayerId,
}

#[derive(Iden)]
enum Turns {
    Table,
    Id,
    GameId,
    PlayerId,
    WhiteDie,
    RedDie,
    EventDie,
    DurationMs,
}

#[derive(Iden)]
enum Pictures {
    Table,
    Id,
    GameId,
    ContentType,
    Data,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Games::IsPaused)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::TotalDurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentTurnDurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Games::CurrentTurnDurationSince)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::EndTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Games::WinnerPlayerId).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::Color).string_len(16).not_null())
                    // Null only while the ring is wired inside the creating transaction
                    .col(ColumnDef::new(Players::NextPlayerId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game_id")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_game_id")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .to_owned(),
            )
            .await?;

        // a color identifies a player within its game
        manager
            .create_index(
                Index::create()
                    .name("ux_players_game_color")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .col(Players::Color)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // turns
        manager
            .create_table(
                Table::create()
                    .table(Turns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turns::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Turns::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Turns::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Turns::WhiteDie)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Turns::WhiteDie).between(1, 6)),
                    )
                    .col(
                        ColumnDef::new(Turns::RedDie)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Turns::RedDie).between(1, 6)),
                    )
                    .col(ColumnDef::new(Turns::EventDie).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Turns::DurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_turns_game_id")
                            .from(Turns::Table, Turns::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_turns_player_id")
                            .from(Turns::Table, Turns::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_turns_game_id")
                    .table(Turns::Table)
                    .col(Turns::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_turns_player_id")
                    .table(Turns::Table)
                    .col(Turns::PlayerId)
                    .to_owned(),
            )
            .await?;

        // pictures
        manager
            .create_table(
                Table::create()
                    .table(Pictures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pictures::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Pictures::GameId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Pictures::ContentType).string().not_null())
                    .col(ColumnDef::new(Pictures::Data).blob().not_null())
                    .col(
                        ColumnDef::new(Pictures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pictures_game_id")
                            .from(Pictures::Table, Pictures::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_table(Table::drop().table(Pictures::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_turns_player_id")
                    .table(Turns::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_turns_game_id")
                    .table(Turns::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Turns::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_players_game_color")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_players_game_id")
                    .table(Players::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}

//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use serde::Serialize;

use crate::adapters::players_sea as players_adapter;
use crate::domain::colors::Color;
use crate::domain::ring::{successor_links, NewPlayer, PlayerRing};
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A seated player with its wired successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub game_id: i64,
    pub name: String,
    pub color: Color,
    pub next_player_id: i64,
}

impl TryFrom<players::Model> for Player {
    type Error = DomainError;

    fn try_from(model: players::Model) -> Result<Self, Self::Error> {
        let next_player_id = model.next_player_id.ok_or_else(|| {
            DomainError::data_corruption(format!("Player {} has no successor", model.id))
        })?;
        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
            color: model.color,
            next_player_id,
        })
    }
}

/// Seat the roster in order and wire the ring, last player back to the first.
///
/// Must run inside the transaction that created the game so the ring is
/// never observed half-wired.
pub async fn create_ring(
    txn: &DatabaseTransaction,
    game_id: i64,
    roster: &[NewPlayer],
) -> Result<Vec<Player>, DomainError> {
    let mut seated = Vec::with_capacity(roster.len());
    for entry in roster {
        let model = players_adapter::create_player(
            txn,
            players_adapter::PlayerCreate {
                game_id,
                name: entry.display_name(),
                color: entry.color,
            },
        )
        .await?;
        seated.push(model);
    }

    let ids: Vec<i64> = seated.iter().map(|p| p.id).collect();
    let links = successor_links(&ids);
    for &(id, next) in &links {
        players_adapter::set_next_player(txn, id, next).await?;
    }

    Ok(seated
        .into_iter()
        .zip(links)
        .map(|(model, (_, next))| Player {
            id: model.id,
            game_id: model.game_id,
            name: model.name,
            color: model.color,
            next_player_id: next,
        })
        .collect())
}

/// All players of a game in seating order.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Player>, DomainError> {
    players_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Player::try_from)
        .collect()
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    let model = players_adapter::find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
        })?;
    Player::try_from(model)
}

/// Build the validated ring for `players`.
pub fn ring_of(players: &[Player]) -> Result<PlayerRing, DomainError> {
    PlayerRing::from_links(players.iter().map(|p| (p.id, p.next_player_id)))
}

/// Load a game's ring straight from storage.
pub async fn load_ring<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<PlayerRing, DomainError> {
    let players = find_all_by_game(conn, game_id).await?;
    ring_of(&players)
}

pub async fn delete_by_game(txn: &DatabaseTransaction, game_id: i64) -> Result<u64, DomainError> {
    Ok(players_adapter::delete_by_game(txn, game_id).await?)
}

//! Read model of one game: the row, its seated players and the ledger.

use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::ring::PlayerRing;
use crate::errors::domain::DomainError;
use crate::repos::games::Game;
use crate::repos::players::Player;
use crate::repos::turns::Turn;

/// Lifecycle state derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing {
        is_paused: bool,
        current_player_id: i64,
        current_turn_duration_ms: i64,
        #[serde(with = "time::serde::rfc3339")]
        current_turn_duration_since: OffsetDateTime,
    },
    Completed {
        winner_player_id: i64,
        #[serde(with = "time::serde::rfc3339")]
        end_time: OffsetDateTime,
    },
}

/// Game + players in ring order (first seat first) + turns most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub game: Game,
    pub players: Vec<Player>,
    pub turns: Vec<Turn>,
    pub has_picture: bool,
    #[serde(skip)]
    ring: PlayerRing,
}

impl GameSnapshot {
    /// Assemble and validate a snapshot from separately loaded parts.
    ///
    /// Players are reordered to follow the ring and turns sorted newest
    /// first. Fails with a data-corruption error if the ring is broken, a
    /// turn belongs to a player outside the game, or the completion fields
    /// disagree.
    pub fn assemble(
        game: Game,
        players: Vec<Player>,
        mut turns: Vec<Turn>,
        has_picture: bool,
    ) -> Result<Self, DomainError> {
        let ring = PlayerRing::from_links(players.iter().map(|p| (p.id, p.next_player_id)))?;

        let mut by_id: HashMap<i64, Player> = players.into_iter().map(|p| (p.id, p)).collect();
        let players: Vec<Player> = ring
            .ids()
            .iter()
            .filter_map(|id| by_id.remove(id))
            .collect();

        if let Some(stray) = turns.iter().find(|t| !ring.contains(t.player_id)) {
            return Err(DomainError::data_corruption(format!(
                "Turn {} belongs to player {} outside game {}",
                stray.id, stray.player_id, game.id
            )));
        }
        if game.end_time.is_some() != game.winner_player_id.is_some() {
            return Err(DomainError::data_corruption(format!(
                "Game {} has end time and winner out of sync",
                game.id
            )));
        }

        turns.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(Self {
            game,
            players,
            turns,
            has_picture,
            ring,
        })
    }

    pub fn id(&self) -> i64 {
        self.game.id
    }

    pub fn ring(&self) -> &PlayerRing {
        &self.ring
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.first()
    }

    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn is_completed(&self) -> bool {
        self.game.is_completed()
    }

    /// Id of the player who would own the next turn.
    fn up_next_id(&self) -> i64 {
        // The ring and turn owners were validated in `assemble`.
        self.last_turn()
            .and_then(|t| self.ring.next_of(t.player_id))
            .unwrap_or_else(|| self.ring.first())
    }

    /// Whose turn it is; `None` once the game is completed.
    pub fn current_player(&self) -> Option<&Player> {
        if self.is_completed() {
            return None;
        }
        self.player(self.up_next_id())
    }

    pub fn winner(&self) -> Option<&Player> {
        self.game.winner_player_id.and_then(|id| self.player(id))
    }

    pub fn status(&self) -> GameStatus {
        match (self.game.end_time, self.game.winner_player_id) {
            (Some(end_time), Some(winner_player_id)) => GameStatus::Completed {
                winner_player_id,
                end_time,
            },
            _ => GameStatus::Ongoing {
                is_paused: self.game.is_paused,
                current_player_id: self.up_next_id(),
                current_turn_duration_ms: self.game.current_turn_duration_ms,
                current_turn_duration_since: self.game.current_turn_duration_since,
            },
        }
    }

    /// Elapsed time of the open turn as of `now`; zero for a completed game.
    pub fn current_turn_elapsed_ms(&self, now: OffsetDateTime) -> i64 {
        if self.is_completed() {
            0
        } else {
            self.game.turn_clock().elapsed_ms(now)
        }
    }

    /// Closed turns plus the open turn as of `now`.
    pub fn total_elapsed_ms(&self, now: OffsetDateTime) -> i64 {
        self.game
            .total_duration_ms
            .saturating_add(self.current_turn_elapsed_ms(now))
    }

    /// Turn count per player, in ring order.
    pub fn turns_by_player(&self) -> Vec<(&Player, usize)> {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for turn in &self.turns {
            *counts.entry(turn.player_id).or_default() += 1;
        }
        self.players
            .iter()
            .map(|p| (p, counts.get(&p.id).copied().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;
    use time::Duration;

    use super::*;
    use crate::domain::colors::Color;
    use crate::domain::dice::{Dice, EventDie};

    const T0: OffsetDateTime = datetime!(2024-03-01 18:00 UTC);

    fn game() -> Game {
        Game {
            id: 1,
            is_paused: false,
            total_duration_ms: 0,
            current_turn_duration_ms: 0,
            current_turn_duration_since: T0,
            start_time: T0,
            end_time: None,
            winner_player_id: None,
        }
    }

    fn player(id: i64, next: i64, color: Color) -> Player {
        Player {
            id,
            game_id: 1,
            name: color.label().to_string(),
            color,
            next_player_id: next,
        }
    }

    fn turn(id: i64, player_id: i64, duration_ms: i64) -> Turn {
        Turn {
            id,
            game_id: 1,
            player_id,
            dice: Dice::from_raw(3, 4, "B").unwrap(),
            duration_ms,
        }
    }

    fn three_players() -> Vec<Player> {
        // Loaded out of order on purpose.
        vec![
            player(12, 10, Color::White),
            player(10, 11, Color::Red),
            player(11, 12, Color::Blue),
        ]
    }

    #[test]
    fn first_seat_is_up_without_turns() {
        let snap = GameSnapshot::assemble(game(), three_players(), vec![], false).unwrap();
        let ids: Vec<i64> = snap.players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert_eq!(snap.current_player().map(|p| p.id), Some(10));
    }

    #[test]
    fn current_player_follows_last_turn_owner() {
        let turns = vec![turn(1, 10, 500), turn(2, 11, 700), turn(3, 12, 300)];
        let snap = GameSnapshot::assemble(game(), three_players(), turns, false).unwrap();
        assert_eq!(snap.last_turn().map(|t| t.id), Some(3));
        assert_eq!(snap.current_player().map(|p| p.id), Some(10));
        assert!(matches!(
            snap.status(),
            GameStatus::Ongoing {
                current_player_id: 10,
                ..
            }
        ));
    }

    #[test]
    fn completed_status_reports_winner() {
        let mut g = game();
        g.end_time = Some(T0 + Duration::minutes(5));
        g.winner_player_id = Some(11);
        g.is_paused = true;
        g.total_duration_ms = 1_200;
        let turns = vec![turn(1, 10, 500), turn(2, 11, 700)];
        let snap = GameSnapshot::assemble(g, three_players(), turns, true).unwrap();

        assert!(snap.current_player().is_none());
        assert_eq!(snap.winner().map(|p| p.color), Some(Color::Blue));
        assert_eq!(snap.current_turn_elapsed_ms(T0 + Duration::hours(1)), 0);
        assert_eq!(snap.total_elapsed_ms(T0 + Duration::hours(1)), 1_200);
        assert!(matches!(
            snap.status(),
            GameStatus::Completed {
                winner_player_id: 11,
                ..
            }
        ));
    }

    #[test]
    fn total_includes_running_turn() {
        let mut g = game();
        g.total_duration_ms = 2_000;
        g.current_turn_duration_ms = 250;
        let snap = GameSnapshot::assemble(g, three_players(), vec![], false).unwrap();
        let now = T0 + Duration::milliseconds(1_000);
        assert_eq!(snap.current_turn_elapsed_ms(now), 1_250);
        assert_eq!(snap.total_elapsed_ms(now), 3_250);
    }

    #[test]
    fn turns_counted_per_player_in_ring_order() {
        let turns = vec![turn(1, 10, 1), turn(2, 11, 1), turn(3, 12, 1), turn(4, 10, 1)];
        let snap = GameSnapshot::assemble(game(), three_players(), turns, false).unwrap();
        let counts: Vec<(i64, usize)> = snap
            .turns_by_player()
            .into_iter()
            .map(|(p, n)| (p.id, n))
            .collect();
        assert_eq!(counts, vec![(10, 2), (11, 1), (12, 1)]);
    }

    #[test]
    fn stray_turn_owner_is_corrupt() {
        let turns = vec![turn(1, 99, 1)];
        assert!(GameSnapshot::assemble(game(), three_players(), turns, false).is_err());
    }

    #[test]
    fn half_completed_row_is_corrupt() {
        let mut g = game();
        g.winner_player_id = Some(10);
        assert!(GameSnapshot::assemble(g, three_players(), vec![], false).is_err());
    }

    #[test]
    fn event_die_survives_assembly() {
        let snap =
            GameSnapshot::assemble(game(), three_players(), vec![turn(1, 10, 1)], false).unwrap();
        assert_eq!(snap.turns[0].dice.event, EventDie::Blue);
    }
}

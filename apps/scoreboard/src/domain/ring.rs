//! Circular seating order of a game's players.
//!
//! Players are an arena keyed by id; each record carries the id of its
//! successor. The ring is wired once when the game starts and never changes.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::colors::Color;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Roster entry supplied when a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub color: Color,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Trimmed name, falling back to the color label when blank.
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            self.color.label().to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Check player count and color uniqueness before anything is written.
pub fn validate_roster(players: &[NewPlayer]) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "A game needs {MIN_PLAYERS} to {MAX_PLAYERS} players, got {}",
                players.len()
            ),
        ));
    }

    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player.color) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateColor,
                format!("Color {} is used by more than one player", player.color),
            ));
        }
    }

    Ok(())
}

/// Successor pairs `(id, next_id)` for ids given in seating order; the last wraps to the first.
pub fn successor_links(ids: &[i64]) -> Vec<(i64, i64)> {
    ids.iter()
        .enumerate()
        .map(|(i, &id)| (id, ids[(i + 1) % ids.len()]))
        .collect()
}

/// Validated ring over one game's players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRing {
    order: Vec<i64>,
    next: HashMap<i64, i64>,
}

impl PlayerRing {
    /// Build from stored `(id, next_player_id)` links.
    ///
    /// The walk starts at the lowest id (the first seat) and must visit every
    /// player exactly once before closing; anything else is corrupt data.
    pub fn from_links<I>(links: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let next: HashMap<i64, i64> = links.into_iter().collect();

        let Some(&first) = next.keys().min() else {
            return Err(DomainError::data_corruption("Game has no players"));
        };
        if next.len() < MIN_PLAYERS {
            return Err(DomainError::data_corruption(format!(
                "Game has {} player(s); a ring needs at least {MIN_PLAYERS}",
                next.len()
            )));
        }

        let mut order = Vec::with_capacity(next.len());
        let mut current = first;
        loop {
            order.push(current);
            let successor = *next.get(&current).ok_or_else(|| {
                DomainError::data_corruption(format!("Player {current} is not part of this game"))
            })?;
            if successor == first {
                break;
            }
            if order.len() >= next.len() {
                return Err(DomainError::data_corruption(format!(
                    "Player ring starting at {first} does not close"
                )));
            }
            current = successor;
        }

        if order.len() != next.len() {
            return Err(DomainError::data_corruption(format!(
                "Player ring covers {} of {} players",
                order.len(),
                next.len()
            )));
        }

        Ok(Self { order, next })
    }

    pub fn first(&self) -> i64 {
        self.order[0]
    }

    pub fn next_of(&self, player_id: i64) -> Option<i64> {
        self.next.get(&player_id).copied()
    }

    pub fn contains(&self, player_id: i64) -> bool {
        self.next.contains_key(&player_id)
    }

    /// Player ids in seating order, first seat first.
    pub fn ids(&self) -> &[i64] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whose turn it is, given the owner of the most recent turn.
    ///
    /// With no turns yet the first seat is up; otherwise the successor of the
    /// last owner. An owner outside the ring means the ledger is corrupt.
    pub fn up_next(&self, last_owner: Option<i64>) -> Result<i64, DomainError> {
        match last_owner {
            None => Ok(self.first()),
            Some(owner) => self.next_of(owner).ok_or_else(|| {
                DomainError::data_corruption(format!(
                    "Turn owner {owner} is not seated in this game"
                ))
            }),
        }
    }

    /// One full lap starting at `start` (yields nothing for unknown ids).
    pub fn lap_from(&self, start: i64) -> impl Iterator<Item = i64> + '_ {
        let len = if self.contains(start) { self.len() } else { 0 };
        std::iter::successors(Some(start), move |id| self.next_of(*id)).take(len)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn roster(colors: &[Color]) -> Vec<NewPlayer> {
        colors
            .iter()
            .map(|c| NewPlayer::new(c.label(), *c))
            .collect()
    }

    #[test]
    fn roster_size_bounds() {
        let one = roster(&[Color::Red]);
        assert!(matches!(
            validate_roster(&one),
            Err(DomainError::Validation(ValidationKind::InvalidPlayerCount, _))
        ));

        assert!(validate_roster(&roster(&Color::ALL)).is_ok());

        let mut seven = roster(&Color::ALL);
        seven.push(NewPlayer::new("Extra", Color::Red));
        assert!(matches!(
            validate_roster(&seven),
            Err(DomainError::Validation(ValidationKind::InvalidPlayerCount, _))
        ));
    }

    #[test]
    fn duplicate_colors_rejected() {
        let players = vec![
            NewPlayer::new("Alice", Color::Red),
            NewPlayer::new("Bob", Color::Red),
        ];
        assert!(matches!(
            validate_roster(&players),
            Err(DomainError::Validation(ValidationKind::DuplicateColor, _))
        ));
    }

    #[test]
    fn blank_name_falls_back_to_color_label() {
        assert_eq!(NewPlayer::new("  ", Color::Brown).display_name(), "Brown");
        assert_eq!(NewPlayer::new(" Ann ", Color::Red).display_name(), "Ann");
    }

    #[test]
    fn ring_wraps_last_to_first() {
        let ring = PlayerRing::from_links(successor_links(&[10, 11, 12])).unwrap();
        assert_eq!(ring.first(), 10);
        assert_eq!(ring.next_of(10), Some(11));
        assert_eq!(ring.next_of(12), Some(10));
        assert_eq!(ring.next_of(99), None);
        assert_eq!(ring.ids(), &[10, 11, 12]);
    }

    #[test]
    fn up_next_follows_last_owner() {
        let ring = PlayerRing::from_links(successor_links(&[4, 5, 6])).unwrap();
        assert_eq!(ring.up_next(None).unwrap(), 4);
        assert_eq!(ring.up_next(Some(4)).unwrap(), 5);
        assert_eq!(ring.up_next(Some(6)).unwrap(), 4);
        assert!(ring.up_next(Some(42)).is_err());
    }

    #[test]
    fn sub_cycles_are_corrupt() {
        // 1 <-> 2 and 3 <-> 4: two cycles
        let links = vec![(1, 2), (2, 1), (3, 4), (4, 3)];
        assert!(matches!(
            PlayerRing::from_links(links),
            Err(DomainError::Infra(_, _))
        ));
    }

    #[test]
    fn dangling_pointer_is_corrupt() {
        let links = vec![(1, 2), (2, 5)];
        assert!(PlayerRing::from_links(links).is_err());
    }

    #[test]
    fn tail_into_cycle_is_corrupt() {
        // 1 -> 2 -> 3 -> 2 never returns to 1
        let links = vec![(1, 2), (2, 3), (3, 2)];
        assert!(PlayerRing::from_links(links).is_err());
    }

    proptest! {
        #[test]
        fn every_lap_visits_each_player_once(
            count in MIN_PLAYERS..=MAX_PLAYERS,
            base in 1i64..10_000,
            start_seat in 0usize..MAX_PLAYERS,
        ) {
            let ids: Vec<i64> = (0..count as i64).map(|i| base + i * 3).collect();
            let ring = PlayerRing::from_links(successor_links(&ids)).unwrap();

            let start = ids[start_seat % count];
            let lap: Vec<i64> = ring.lap_from(start).collect();
            prop_assert_eq!(lap.len(), count);

            let unique: HashSet<i64> = lap.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);

            let last = *lap.last().unwrap();
            prop_assert_eq!(ring.next_of(last), Some(start));
        }
    }
}

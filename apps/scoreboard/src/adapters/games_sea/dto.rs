//! DTOs for games_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a new game. The first turn starts running at `start_time`.
#[derive(Debug, Clone, Copy)]
pub struct GameCreate {
    pub start_time: OffsetDateTime,
}

impl GameCreate {
    pub fn new(start_time: OffsetDateTime) -> Self {
        Self { start_time }
    }
}

/// Partial update of a game's running counters and completion fields.
///
/// `None` leaves a column untouched. The nullable completion columns are
/// three-state: `None` = no change, `Some(Some(v))` = set, `Some(None)` = clear.
#[derive(Debug, Clone, Default)]
pub struct GameUpdate {
    pub id: i64,
    pub is_paused: Option<bool>,
    pub total_duration_ms: Option<i64>,
    pub current_turn_duration_ms: Option<i64>,
    pub current_turn_duration_since: Option<OffsetDateTime>,
    pub end_time: Option<Option<OffsetDateTime>>,
    pub winner_player_id: Option<Option<i64>>,
}

impl GameUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_paused(mut self, is_paused: bool) -> Self {
        self.is_paused = Some(is_paused);
        self
    }

    pub fn with_total_duration_ms(mut self, total: i64) -> Self {
        self.total_duration_ms = Some(total);
        self
    }

    /// Persist the open turn's accumulator.
    pub fn with_turn_clock(mut self, accumulated_ms: i64, since: OffsetDateTime) -> Self {
        self.current_turn_duration_ms = Some(accumulated_ms);
        self.current_turn_duration_since = Some(since);
        self
    }

    pub fn completed(mut self, end_time: OffsetDateTime, winner_player_id: i64) -> Self {
        self.end_time = Some(Some(end_time));
        self.winner_player_id = Some(Some(winner_player_id));
        self
    }

    pub fn reopened(mut self) -> Self {
        self.end_time = Some(None);
        self.winner_player_id = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_paused.is_none()
            && self.total_duration_ms.is_none()
            && self.current_turn_duration_ms.is_none()
            && self.current_turn_duration_since.is_none()
            && self.end_time.is_none()
            && self.winner_player_id.is_none()
    }
}

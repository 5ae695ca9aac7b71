#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use scoreboard::domain::clock::{Clock, ManualClock};
use scoreboard::domain::dice::Dice;
use scoreboard::domain::ring::NewPlayer;
use scoreboard::{build_state, AppError, Color, DbKind, Scoreboard};
use scoreboard_test_support::unique_helpers::unique_player_name;
use time::macros::datetime;
use time::OffsetDateTime;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scoreboard_test_support::logging::init();
}

pub const T0: OffsetDateTime = datetime!(2024-03-01 18:00 UTC);

/// A scoreboard over a private in-memory database plus the clock driving it.
pub struct TestBoard {
    pub board: Scoreboard,
    pub clock: ManualClock,
}

impl TestBoard {
    pub fn advance_ms(&self, ms: i64) {
        self.clock.advance_ms(ms);
    }

    pub fn clock_now(&self) -> OffsetDateTime {
        self.clock.now()
    }
}

pub async fn memory_board() -> Result<TestBoard, AppError> {
    let clock = ManualClock::new(T0);
    let state = build_state()
        .with_db(DbKind::SqliteMemory)
        .with_clock(Arc::new(clock.clone()))
        .build()
        .await?;
    Ok(TestBoard {
        board: Scoreboard::new(state),
        clock,
    })
}

pub fn dice(white: i16, red: i16, event: &str) -> Dice {
    Dice::from_raw(white, red, event).unwrap()
}

pub fn alice_and_bob() -> Vec<NewPlayer> {
    vec![
        NewPlayer::new("Alice", Color::Red),
        NewPlayer::new("Bob", Color::Blue),
    ]
}

/// `count` players with distinct colors taken in palette order.
pub fn roster(count: usize) -> Vec<NewPlayer> {
    Color::ALL
        .iter()
        .cycle()
        .take(count)
        .map(|color| NewPlayer::new(unique_player_name(color.label()), *color))
        .collect()
}

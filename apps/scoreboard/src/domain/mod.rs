//! Domain layer: pure scoring-session types and rules.
//!
//! Nothing in here touches the database; services load records through the
//! repos layer and hand plain values to these types.

pub mod accountant;
pub mod clock;
pub mod colors;
pub mod dice;
pub mod duration;
pub mod ring;
pub mod snapshot;

pub use accountant::TurnClock;
pub use clock::{Clock, ManualClock, SystemClock};
pub use colors::Color;
pub use dice::{Dice, DieNumber, EventDie};
pub use duration::format_duration_ms;
pub use ring::{NewPlayer, PlayerRing, MAX_PLAYERS, MIN_PLAYERS};
pub use snapshot::{GameSnapshot, GameStatus};

//! Dice recorded with every turn.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// A pip die face, 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct DieNumber(u8);

impl DieNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: i16) -> Result<Self, DomainError> {
        if (Self::MIN as i16..=Self::MAX as i16).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidDice,
                format!("Die value {value} is outside 1..=6"),
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i16> for DieNumber {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieNumber> for i16 {
    fn from(d: DieNumber) -> Self {
        d.0 as i16
    }
}

impl fmt::Display for DieNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The event die: four symbolic faces (A–D).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum EventDie {
    /// Face A
    #[sea_orm(string_value = "yellow")]
    Yellow,
    /// Face B
    #[sea_orm(string_value = "blue")]
    Blue,
    /// Face C
    #[sea_orm(string_value = "green")]
    Green,
    /// Face D
    #[sea_orm(string_value = "black")]
    Black,
}

impl EventDie {
    pub const ALL: [EventDie; 4] = [
        EventDie::Yellow,
        EventDie::Blue,
        EventDie::Green,
        EventDie::Black,
    ];

    pub fn letter(self) -> char {
        match self {
            EventDie::Yellow => 'A',
            EventDie::Blue => 'B',
            EventDie::Green => 'C',
            EventDie::Black => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventDie::Yellow => "yellow",
            EventDie::Blue => "blue",
            EventDie::Green => "green",
            EventDie::Black => "black",
        }
    }
}

impl fmt::Display for EventDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventDie {
    type Err = DomainError;

    /// Accepts the face letter (`A`..`D`) or its name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        EventDie::ALL
            .into_iter()
            .find(|face| {
                face.name() == needle || face.letter().to_ascii_lowercase().to_string() == needle
            })
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidDice,
                    format!("Unknown event die face '{s}'"),
                )
            })
    }
}

/// The three dice rolled on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub white: DieNumber,
    pub red: DieNumber,
    pub event: EventDie,
}

impl Dice {
    pub fn new(white: DieNumber, red: DieNumber, event: EventDie) -> Self {
        Self { white, red, event }
    }

    /// Build dice from raw values, failing with `InvalidDice` on any bad face.
    pub fn from_raw(white: i16, red: i16, event: &str) -> Result<Self, DomainError> {
        Ok(Self {
            white: DieNumber::new(white)?,
            red: DieNumber::new(red)?,
            event: event.parse()?,
        })
    }

    /// Sum of the two pip dice.
    pub fn total(&self) -> u8 {
        self.white.get() + self.red.get()
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{} [{}]", self.white, self.red, self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_number_bounds() {
        assert!(DieNumber::new(0).is_err());
        assert_eq!(DieNumber::new(1).unwrap().get(), 1);
        assert_eq!(DieNumber::new(6).unwrap().get(), 6);
        assert!(DieNumber::new(7).is_err());
        assert!(DieNumber::new(-3).is_err());
    }

    #[test]
    fn event_die_accepts_letters_and_names() {
        assert_eq!("B".parse::<EventDie>().unwrap(), EventDie::Blue);
        assert_eq!("d".parse::<EventDie>().unwrap(), EventDie::Black);
        assert_eq!("Yellow".parse::<EventDie>().unwrap(), EventDie::Yellow);
        assert!("E".parse::<EventDie>().is_err());
        assert!("".parse::<EventDie>().is_err());
    }

    #[test]
    fn from_raw_reports_invalid_dice() {
        let dice = Dice::from_raw(3, 4, "B").unwrap();
        assert_eq!(dice.total(), 7);
        assert_eq!(dice.to_string(), "3+4 [blue]");

        let err = Dice::from_raw(3, 9, "B").unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidDice, _)
        ));
    }

    #[test]
    fn die_number_serde_rejects_out_of_range() {
        let ok: DieNumber = serde_json::from_str("5").unwrap();
        assert_eq!(ok.get(), 5);
        assert!(serde_json::from_str::<DieNumber>("0").is_err());
    }
}

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Player color from the fixed palette; unique within a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[sea_orm(string_value = "red")]
    Red,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "yellow")]
    Yellow,
    #[sea_orm(string_value = "white")]
    White,
    #[sea_orm(string_value = "brown")]
    Brown,
    #[sea_orm(string_value = "green")]
    Green,
}

impl Color {
    /// Palette in the default seating order of the setup screen.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Brown,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Brown => "brown",
            Color::Green => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::White => "White",
            Color::Brown => "Brown",
            Color::Green => "Green",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ff595e",
            Color::Blue => "#1982c4",
            Color::Yellow => "#ffca3a",
            Color::White => "#e2e2df",
            Color::Brown => "#d68c45",
            Color::Green => "#8ac926",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.id() == needle)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::InvalidColor, format!("Unknown color '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!(" green ".parse::<Color>().unwrap(), Color::Green);
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn palette_is_six_distinct_colors() {
        let ids: HashSet<_> = Color::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 6);
        for color in Color::ALL {
            assert_eq!(color.id().parse::<Color>().unwrap(), color);
        }
    }
}

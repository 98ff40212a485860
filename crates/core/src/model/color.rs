use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown range color: {0:?}")]
pub struct ColorParseError(pub String);

//
// ─── COLOR ────────────────────────────────────────────────────────────────────
//

/// Range color assigned to a starting hand.
///
/// Ordered from the tightest opening position down to a fold. The catalog
/// stores colors by their Japanese label; the English identifier is accepted
/// as an alias when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Strong UTG hands (8 players behind).
    Navy,
    /// UTG hands (8 players behind).
    Red,
    /// Early position (6-7 behind).
    Yellow,
    /// Lojack / hijack (4-5 behind).
    Green,
    /// Cutoff (3 behind).
    LightBlue,
    /// Button (0-2 behind).
    White,
    /// Big blind call versus a button raise only.
    Pink,
    /// Fold.
    Gray,
}

impl Color {
    /// All colors in display order.
    pub const ALL: [Color; 8] = [
        Color::Navy,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::LightBlue,
        Color::White,
        Color::Pink,
        Color::Gray,
    ];

    /// Label used in the catalog and on the answer buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Color::Navy => "紺",
            Color::Red => "赤",
            Color::Yellow => "黄",
            Color::Green => "緑",
            Color::LightBlue => "水色",
            Color::White => "白",
            Color::Pink => "ピンク",
            Color::Gray => "グレー",
        }
    }

    /// Lowercase English identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Navy => "navy",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::LightBlue => "light_blue",
            Color::White => "white",
            Color::Pink => "pink",
            Color::Gray => "gray",
        }
    }

    /// Display color as a `#rrggbb` string.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Color::Navy => "#2c3e50",
            Color::Red => "#e74c3c",
            Color::Yellow => "#f1c40f",
            Color::Green => "#27ae60",
            Color::LightBlue => "#3498db",
            Color::White => "#bdc3c7",
            Color::Pink => "#ff69b4",
            Color::Gray => "#7f8c8d",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Color::Navy => "UTG (8 behind) premium hands",
            Color::Red => "UTG (8 behind) hands",
            Color::Yellow => "EP (6-7 behind) hands",
            Color::Green => "LJ, HJ (4-5 behind) hands",
            Color::LightBlue => "CO (3 behind) hands",
            Color::White => "BTN (0-2 behind) hands",
            Color::Pink => "BB only: call a BTN raise",
            Color::Gray => "Fold",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.label() == trimmed || c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ColorParseError(trimmed.to_owned()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

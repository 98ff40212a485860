use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandParseError {
    #[error("hand notation is too short: {0:?}")]
    TooShort(String),

    #[error("hand notation is too long: {0:?}")]
    TooLong(String),

    #[error("unknown rank {rank:?} in hand {hand:?}")]
    UnknownRank { hand: String, rank: char },

    #[error("unknown suffix {suffix:?} in hand {hand:?}")]
    UnknownSuffix { hand: String, suffix: char },
}

//
// ─── RANK ─────────────────────────────────────────────────────────────────────
//

/// Card rank (2-14, where 14 = Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// Parses an uppercase rank character (`A K Q J T 9..2`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let rank = match c {
            'A' => Rank::Ace,
            'K' => Rank::King,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'T' => Rank::Ten,
            '9' => Rank::Nine,
            '8' => Rank::Eight,
            '7' => Rank::Seven,
            '6' => Rank::Six,
            '5' => Rank::Five,
            '4' => Rank::Four,
            '3' => Rank::Three,
            '2' => Rank::Two,
            _ => return None,
        };
        Some(rank)
    }

    /// Notation character for this rank.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
        }
    }

    /// Rank component of a card asset name (`ace`, `king`, ..., `10`, `9`, ...).
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::King => "king",
            Rank::Queen => "queen",
            Rank::Jack => "jack",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
        }
    }
}

//
// ─── HAND NOTATION ────────────────────────────────────────────────────────────
//

/// Suit relationship between the two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Pocket,
    Suited,
    Offsuit,
}

/// Parsed starting-hand notation such as `AA`, `AKs` or `KQo`.
///
/// Parsing trims and uppercases the input. Equal ranks are always a pocket
/// pair, an `o` suffix is offsuit, and an `s` suffix or no suffix at all is
/// suited. Any other suffix is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandNotation {
    first: Rank,
    second: Rank,
    kind: HandKind,
}

impl HandNotation {
    /// Parse a hand notation.
    ///
    /// # Errors
    ///
    /// Returns `HandParseError` when the input is not two known ranks followed
    /// by an optional `s`/`o` suffix.
    pub fn parse(raw: &str) -> Result<Self, HandParseError> {
        let normalized = raw.trim().to_uppercase();
        let chars: Vec<char> = normalized.chars().collect();
        if chars.len() < 2 {
            return Err(HandParseError::TooShort(normalized));
        }
        if chars.len() > 3 {
            return Err(HandParseError::TooLong(normalized));
        }

        let rank_at = |i: usize| {
            Rank::from_char(chars[i]).ok_or_else(|| HandParseError::UnknownRank {
                hand: normalized.clone(),
                rank: chars[i],
            })
        };
        let first = rank_at(0)?;
        let second = rank_at(1)?;

        let offsuit = match chars.get(2) {
            None | Some('S') => false,
            Some('O') => true,
            Some(&other) => {
                return Err(HandParseError::UnknownSuffix {
                    hand: normalized,
                    suffix: other,
                });
            }
        };

        let kind = if first == second {
            HandKind::Pocket
        } else if offsuit {
            HandKind::Offsuit
        } else {
            HandKind::Suited
        };

        Ok(Self {
            first,
            second,
            kind,
        })
    }

    #[must_use]
    pub fn first(&self) -> Rank {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Rank {
        self.second
    }

    #[must_use]
    pub fn kind(&self) -> HandKind {
        self.kind
    }
}

impl FromStr for HandNotation {
    type Err = HandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HandNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first.symbol(), self.second.symbol())?;
        match self.kind {
            HandKind::Pocket => Ok(()),
            HandKind::Suited => f.write_str("s"),
            HandKind::Offsuit => f.write_str("o"),
        }
    }
}

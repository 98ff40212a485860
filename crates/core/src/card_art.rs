//! Maps a starting-hand notation to two concrete card images.
//!
//! Suits are drawn at random on every call; only the same-suit versus
//! different-suit relationship is fixed by the hand's kind.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{HandKind, HandNotation, HandParseError, Rank};

/// Represents a card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in standard order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Suit component of a card asset name.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

/// One resolved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardFace {
    /// Asset identifier, e.g. `ace_of_spades` or `10_of_hearts`.
    #[must_use]
    pub fn asset_name(&self) -> String {
        format!("{}_of_{}", self.rank.asset_name(), self.suit.asset_name())
    }

    /// Image path under `base`, e.g. `/poker-training/images/ace_of_spades.png`.
    #[must_use]
    pub fn image_path(&self, base: &str) -> String {
        format!("{base}images/{}.png", self.asset_name())
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asset_name())
    }
}

/// The two hole cards drawn for a hand, in notation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub first: CardFace,
    pub second: CardFace,
}

impl CardPair {
    #[must_use]
    pub fn same_suit(&self) -> bool {
        self.first.suit == self.second.suit
    }
}

/// Parse `hand` and draw suits for it.
///
/// # Errors
///
/// Returns `HandParseError` if `hand` is not a valid starting-hand notation.
pub fn resolve_card_art<R: Rng + ?Sized>(
    hand: &str,
    rng: &mut R,
) -> Result<CardPair, HandParseError> {
    let notation = HandNotation::parse(hand)?;
    Ok(resolve_notation(&notation, rng))
}

/// Draw suits for an already parsed hand.
///
/// Pocket pairs and offsuit hands get a second suit chosen uniformly from the
/// three suits other than the first; suited hands reuse the first suit.
pub fn resolve_notation<R: Rng + ?Sized>(hand: &HandNotation, rng: &mut R) -> CardPair {
    let first_suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
    let second_suit = match hand.kind() {
        HandKind::Suited => first_suit,
        HandKind::Pocket | HandKind::Offsuit => {
            let others: Vec<Suit> = Suit::ALL
                .into_iter()
                .filter(|s| *s != first_suit)
                .collect();
            others[rng.random_range(0..others.len())]
        }
    };

    CardPair {
        first: CardFace {
            rank: hand.first(),
            suit: first_suit,
        },
        second: CardFace {
            rank: hand.second(),
            suit: second_suit,
        },
    }
}

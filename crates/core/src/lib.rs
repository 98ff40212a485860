#![forbid(unsafe_code)]

pub mod card_art;
pub mod error;
pub mod model;
pub mod stopwatch;
pub mod time;

pub use card_art::{CardFace, CardPair, Suit, resolve_card_art, resolve_notation};
pub use error::Error;
pub use stopwatch::TimerState;
pub use time::{Clock, format_elapsed};

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;

// Re-exports for public API
pub use domain::deck::Deck;
pub use domain::hand::Hand;
pub use domain::seating::{PlayOrder, PlayerAtTable, Seat};
pub use domain::trick::Trick;
pub use domain::{
    card_beats, derive_dealing_seed, hand_has_suit, try_parse_cards, Card, Rank, Suit,
};
pub use errors::domain::{DomainError, ValidationKind};

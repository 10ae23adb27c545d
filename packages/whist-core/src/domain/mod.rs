//! Domain layer: pure trick-play logic, types, and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod hand;
pub mod rules;
pub mod seating;
pub mod seed_derivation;
pub mod trick;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_trick;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
pub use rules::{DECK_SIZE, SEATS, TRICKS_PER_HAND};
pub use seating::{next_seat, seat_offset, PlayOrder, PlayerAtTable, Seat};
pub use seed_derivation::derive_dealing_seed;
pub use trick::Trick;

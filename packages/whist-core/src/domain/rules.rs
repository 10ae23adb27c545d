//! Fixed parameters of standard four-seat whist.

/// Seats at the table.
pub const SEATS: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Tricks in one complete hand.
pub const TRICKS_PER_HAND: usize = 13;

//! Seats, per-seat card holdings, and the rotating play order.
//!
//! Seat/turn math lives here so every layer driving the engine shares a
//! single source of truth for rotation and "who acts next".

use crate::domain::cards_logic::hand_has_suit;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{SEATS, TRICKS_PER_HAND};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3, stable table position

/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(SEATS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(s: Seat) -> Seat {
    seat_offset(s, 1)
}

/// A table position together with that player's un-played cards.
///
/// Created once per seating; its cards are populated by `Hand::deal` and
/// drained via `take` as the player puts cards into tricks.
#[derive(Debug, Clone)]
pub struct PlayerAtTable {
    seat: Seat,
    cards: Vec<Card>,
}

impl PlayerAtTable {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            cards: Vec::with_capacity(TRICKS_PER_HAND),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The seat's current un-played cards, in the order they were dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(&self.cards, suit)
    }

    /// Add a dealt card to this seat's holdings.
    pub fn give(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove `card` from this seat's holdings, typically on the way into a
    /// trick.
    pub fn take(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::validation(ValidationKind::CardNotInHand, "Card not in hand")
        })?;
        Ok(self.cards.remove(pos))
    }
}

/// An ordered sequence of the four seats; index 0 leads.
///
/// The seat set never changes across a hand, only who leads. Rotations
/// return new `PlayOrder` values so orders captured by external code (for
/// display, say) are never silently mutated underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOrder {
    seats: [Seat; SEATS],
}

impl PlayOrder {
    /// Build an order from an explicit seat sequence.
    pub fn new(seats: [Seat; SEATS]) -> Result<Self, DomainError> {
        for (i, &seat) in seats.iter().enumerate() {
            if seat as usize >= SEATS {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSeat,
                    format!("Seat {seat} is not a table position"),
                ));
            }
            if seats[..i].contains(&seat) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateSeat,
                    format!("Seat {seat} appears more than once"),
                ));
            }
        }
        Ok(Self { seats })
    }

    /// Canonical table order starting at `leader`.
    pub fn from_leader(leader: Seat) -> Result<Self, DomainError> {
        if leader as usize >= SEATS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Seat {leader} is not a table position"),
            ));
        }
        let mut seats = [0; SEATS];
        let mut seat = leader;
        for slot in seats.iter_mut() {
            *slot = seat;
            seat = next_seat(seat);
        }
        Ok(Self { seats })
    }

    pub fn leader(&self) -> Seat {
        self.seats[0]
    }

    pub fn seats(&self) -> [Seat; SEATS] {
        self.seats
    }

    pub fn iter(&self) -> impl Iterator<Item = Seat> + '_ {
        self.seats.iter().copied()
    }

    /// Position of `seat` in this order, if it is a member.
    pub fn position_of(&self, seat: Seat) -> Option<usize> {
        self.seats.iter().position(|&s| s == seat)
    }

    /// A new order with `leader` first and the other seats in unchanged
    /// cyclic order. The winner of a trick leads the next one through this.
    ///
    /// The seat must be a member; anything else means internal state is
    /// corrupt, which is not a recoverable condition.
    pub fn rotated_to(&self, leader: Seat) -> Self {
        let Some(pos) = self.position_of(leader) else {
            unreachable!("seat {leader} is not part of play order {:?}", self.seats)
        };
        let mut seats = self.seats;
        seats.rotate_left(pos);
        Self { seats }
    }

    /// The order a brand-new hand would start with: one seat to the left,
    /// independent of any trick outcome. External match sequencing relies
    /// on this fixed contract.
    pub fn next_order(&self) -> Self {
        let mut seats = self.seats;
        seats.rotate_left(1);
        Self { seats }
    }
}

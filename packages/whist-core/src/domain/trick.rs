//! One round of card play: a single card from each seat, resolved under
//! trump/lead rules.

use crate::domain::cards_logic::card_beats;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::SEATS;
use crate::domain::seating::{PlayOrder, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// A trick accumulates one play per seat in a fixed order, under the hand's
/// fixed trump. Once four cards are in, the trick is immutable and its
/// winner is defined.
#[derive(Debug, Clone)]
pub struct Trick {
    order: PlayOrder,
    trump: Suit,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(order: PlayOrder, trump: Suit) -> Self {
        Self {
            order,
            trump,
            plays: Vec::with_capacity(SEATS),
        }
    }

    /// The order play proceeds for this trick only.
    pub fn order(&self) -> &PlayOrder {
        &self.order
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// Suit of the first play, once there is one.
    pub fn lead(&self) -> Option<Suit> {
        self.plays.first().map(|&(_, c)| c.suit)
    }

    /// Ordered plays recorded so far (who, card).
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    pub fn done(&self) -> bool {
        self.plays.len() == SEATS
    }

    /// The seat expected to act next, or None once the trick is complete.
    pub fn expected_seat(&self) -> Option<Seat> {
        self.order.seats().get(self.plays.len()).copied()
    }

    /// Record `seat`'s card. The last line of defense against re-entrant or
    /// out-of-order play from the driving layer.
    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        if self.done() {
            return Err(DomainError::validation(
                ValidationKind::TrickAlreadyDone,
                "Trick already has four cards",
            ));
        }
        if self.order.position_of(seat).is_none() {
            return Err(DomainError::validation(
                ValidationKind::SeatNotAtTable,
                "Seat is not part of this trick",
            ));
        }
        if self.plays.iter().any(|&(s, _)| s == seat) {
            return Err(DomainError::validation(
                ValidationKind::SeatAlreadyPlayed,
                "Seat already played in this trick",
            ));
        }
        let expected = self.order.seats()[self.plays.len()];
        if seat != expected {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        self.plays.push((seat, card));
        Ok(())
    }

    /// The seat that won the trick: highest trump played, or highest card
    /// of the led suit when no trump was played. Off-suit discards never
    /// win regardless of rank.
    pub fn winner(&self) -> Result<Seat, DomainError> {
        if !self.done() {
            return Err(DomainError::validation(
                ValidationKind::TrickNotDone,
                "Trick is not complete",
            ));
        }
        let lead = self.plays[0].1.suit;
        let mut best_idx = 0usize;
        for i in 1..self.plays.len() {
            let (_, card_i) = self.plays[i];
            let (_, card_best) = self.plays[best_idx];
            if card_beats(card_i, card_best, lead, self.trump) {
                best_idx = i;
            }
        }
        Ok(self.plays[best_idx].0)
    }
}

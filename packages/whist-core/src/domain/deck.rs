//! Full-deck construction and random card removal.

use rand::Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

/// The cards remaining to be dealt. Starts as all 52 distinct cards and
/// shrinks by exactly one on each `pop_random`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck in stable (suit-major) order.
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return one uniformly selected remaining card.
    ///
    /// Dealing never pops more than 52 cards per deck, so an empty deck here
    /// means the caller lost count.
    pub fn pop_random(&mut self, rng: &mut impl Rng) -> Result<Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyDeck,
                "Invariant violated: pop_random on an empty deck",
            ));
        }
        let idx = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(idx))
    }
}

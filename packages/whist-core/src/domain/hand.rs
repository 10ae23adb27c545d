//! Hand lifecycle: dealing, trump fixation, trick sequencing, and the
//! winner-leads-next-trick rotation.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::domain::cards_types::Suit;
use crate::domain::deck::Deck;
use crate::domain::rules::{SEATS, TRICKS_PER_HAND};
use crate::domain::seating::{PlayOrder, PlayerAtTable, Seat};
use crate::domain::trick::Trick;
use crate::errors::domain::{DomainError, ValidationKind};

/// Orchestrates one full 13-trick hand.
///
/// Owns the four seated players, the current play order (replaced, never
/// mutated in place, after each trick), the trump suit fixed at deal time,
/// and the append-only list of tricks. A `Hand` advances strictly through
/// caller-driven calls: `deal`, then external `Trick::play` rounds
/// alternating with `next_trick` until `done`.
#[derive(Debug, Clone)]
pub struct Hand {
    players: [PlayerAtTable; SEATS],
    order: PlayOrder,
    trump: Option<Suit>,
    tricks: Vec<Trick>,
}

impl Hand {
    pub fn new(order: PlayOrder) -> Self {
        Self {
            players: std::array::from_fn(|s| PlayerAtTable::new(s as Seat)),
            order,
            trump: None,
            tricks: Vec::with_capacity(TRICKS_PER_HAND),
        }
    }

    /// Deal the full deck round-robin and open the first trick.
    ///
    /// Cards are popped one at a time from a fresh deck, seeded from
    /// `seed`, and handed to seats in current-order cyclic sequence until
    /// the deck is empty (13 cards per seat). The suit of the very last
    /// card dealt is turned up as trump; the card itself still goes to the
    /// seat that was dealt it.
    pub fn deal(&mut self, seed: u64) -> Result<&Trick, DomainError> {
        if self.trump.is_some() || !self.tricks.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyDealt,
                "Hand has already been dealt",
            ));
        }

        let mut deck = Deck::full();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let seats = self.order.seats();
        let mut dealt = 0usize;
        while !deck.is_empty() {
            let card = deck.pop_random(&mut rng)?;
            if deck.is_empty() {
                self.trump = Some(card.suit);
            }
            self.players[seats[dealt % SEATS] as usize].give(card);
            dealt += 1;
        }

        let Some(trump) = self.trump else {
            return Err(DomainError::validation_other(
                "Invariant violated: trump must be set after dealing",
            ));
        };

        info!(seed, trump = ?trump, leader = seats[0], "Hand dealt");
        debug!(trick_no = 1, leader = seats[0], "Transition: -> Trick");
        self.tricks.push(Trick::new(self.order, trump));
        self.tricks
            .last()
            .ok_or_else(|| DomainError::validation_other("Invariant violated: no trick after deal"))
    }

    /// Close out the just-finished trick and open the next one, rotated so
    /// the winner leads.
    ///
    /// An unfinished current trick is a recoverable condition: the caller
    /// simply has not collected all four plays yet.
    pub fn next_trick(&mut self) -> Result<&Trick, DomainError> {
        let Some(trump) = self.trump else {
            return Err(DomainError::validation(
                ValidationKind::NotDealt,
                "Hand has not been dealt",
            ));
        };
        if self.done() {
            return Err(DomainError::validation(
                ValidationKind::HandDone,
                "All thirteen tricks have been played",
            ));
        }
        let last = self.tricks.last().ok_or_else(|| {
            DomainError::validation_other("Invariant violated: dealt hand has no tricks")
        })?;
        if !last.done() {
            return Err(DomainError::validation(
                ValidationKind::TrickNotDone,
                "Current trick is not complete",
            ));
        }
        let winner = last.winner()?;

        // Replace, don't mutate: orders captured by external code stay valid.
        self.order = self.order.rotated_to(winner);
        debug!(
            winner,
            trick_no = self.tricks.len() + 1,
            "Transition: winner leads next trick"
        );
        self.tricks.push(Trick::new(self.order, trump));
        self.tricks.last().ok_or_else(|| {
            DomainError::validation_other("Invariant violated: no trick after append")
        })
    }

    /// True iff all thirteen tricks exist and the last one is complete.
    ///
    /// Checking only the last trick is sound because `next_trick` never
    /// appends past an unfinished trick; earlier tricks are complete by
    /// construction. Keep it that way rather than scanning all thirteen.
    pub fn done(&self) -> bool {
        self.tricks.len() == TRICKS_PER_HAND && self.tricks.last().is_some_and(Trick::done)
    }

    /// Trump for the whole hand; None until dealt.
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// The order the current trick is played in.
    pub fn play_order(&self) -> &PlayOrder {
        &self.order
    }

    /// The order a following hand would start with (rotate one seat),
    /// independent of any trick outcome. For external match sequencing.
    pub fn next_play_order(&self) -> PlayOrder {
        self.order.next_order()
    }

    /// All tricks so far, in play order; the last may be in progress.
    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    /// The in-progress trick, for the layer collecting plays.
    pub fn current_trick_mut(&mut self) -> Option<&mut Trick> {
        self.tricks.last_mut()
    }

    /// Seat accessors. Seats are 0..=3 by the `Seat` contract; anything
    /// else is a programming error and panics on the index.
    pub fn player(&self, seat: Seat) -> &PlayerAtTable {
        &self.players[seat as usize]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut PlayerAtTable {
        &mut self.players[seat as usize]
    }
}

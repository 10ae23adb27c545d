// Proptest generators for domain types.
// Generators keep cards unique and orders valid so properties exercise real
// table states.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::seating::{PlayOrder, Seat};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Two),
        Just(Rank::Three),
        Just(Rank::Four),
        Just(Rank::Five),
        Just(Rank::Six),
        Just(Rank::Seven),
        Just(Rank::Eight),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
    ]
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards via a shuffled prefix of the deck
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                all_cards.push(Card { suit, rank });
            }
        }
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a Seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a random permutation of the four seats as a PlayOrder
pub fn play_order() -> impl Strategy<Value = PlayOrder> {
    Just(()).prop_perturb(|_, mut rng| {
        let mut seats: [Seat; 4] = [0, 1, 2, 3];
        for i in 0..3 {
            let j = rng.random_range(i..4);
            seats.swap(i, j);
        }
        PlayOrder::new(seats).expect("permutation of the table seats")
    })
}

/// Complete trick: a play order, one unique card per seat in that order,
/// and a trump suit
pub fn complete_trick() -> impl Strategy<Value = (PlayOrder, Vec<(Seat, Card)>, Suit)> {
    (play_order(), unique_cards(4), suit()).prop_map(|(order, cards, trump)| {
        let plays: Vec<(Seat, Card)> = order.iter().zip(cards.iter().copied()).collect();
        (order, plays, trump)
    })
}

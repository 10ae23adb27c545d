use crate::domain::cards_types::Suit;
use crate::domain::fixtures::CardFixtures;
use crate::domain::seating::{PlayOrder, Seat};
use crate::domain::trick::Trick;
use crate::errors::domain::{DomainError, ValidationKind};

/// Play one hardcoded card per seat, in the trick's order.
fn play_all(trick: &mut Trick, tokens: &[&str]) {
    let cards = CardFixtures::parse_hardcoded(tokens);
    let seats: Vec<Seat> = trick.order().iter().collect();
    for (seat, card) in seats.into_iter().zip(cards) {
        trick.play(seat, card).unwrap();
    }
}

#[test]
fn lone_trump_wins_over_higher_offsuit() {
    // trump=Hearts; plays 7♣ K♣ 2♥ 3♣ → the 2♥ seat wins
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    play_all(&mut trick, &["7C", "KC", "2H", "3C"]);
    assert!(trick.done());
    assert_eq!(trick.winner().unwrap(), 2);
}

#[test]
fn highest_of_led_suit_wins_when_no_trump_played() {
    // trump=Hearts; plays 7♣ K♣ 9♣ 3♦ → the K♣ seat wins; the off-suit
    // diamond cannot win regardless of rank
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    play_all(&mut trick, &["7C", "KC", "9C", "3D"]);
    assert_eq!(trick.winner().unwrap(), 1);
}

#[test]
fn winner_is_a_seat_not_a_position() {
    // Same plays, but seat 2 leads: winners must be reported as seats
    let order = PlayOrder::from_leader(2).unwrap(); // 2, 3, 0, 1
    let mut trick = Trick::new(order, Suit::Hearts);
    play_all(&mut trick, &["7C", "KC", "2H", "3C"]);
    // Third player in order (seat 0) played the lone trump
    assert_eq!(trick.winner().unwrap(), 0);
}

#[test]
fn winner_before_done_is_an_error() {
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Spades);
    // Only two of four seats have played
    play_all(&mut trick, &["AS", "KS"]);
    let err = trick.winner().unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::TrickNotDone);
}

#[test]
fn lead_is_fixed_by_the_first_play() {
    let order = PlayOrder::from_leader(1).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    assert_eq!(trick.lead(), None);
    assert_eq!(trick.expected_seat(), Some(1));

    let cards = CardFixtures::parse_hardcoded(&["QD"]);
    trick.play(1, cards[0]).unwrap();
    assert_eq!(trick.lead(), Some(Suit::Diamonds));
    assert_eq!(trick.expected_seat(), Some(2));
}

#[test]
fn play_rejects_out_of_turn_seats() {
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    let cards = CardFixtures::parse_hardcoded(&["AS"]);
    assert_eq!(
        trick.play(1, cards[0]).unwrap_err(),
        DomainError::validation(ValidationKind::OutOfTurn, "Out of turn")
    );
}

#[test]
fn play_rejects_second_card_from_same_seat() {
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    let cards = CardFixtures::parse_hardcoded(&["AS", "KS"]);
    trick.play(0, cards[0]).unwrap();
    let err = trick.play(0, cards[1]).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::SeatAlreadyPlayed);
}

#[test]
fn play_rejects_seats_not_at_the_table() {
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    let cards = CardFixtures::parse_hardcoded(&["AS"]);
    let err = trick.play(7, cards[0]).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::SeatNotAtTable);
}

#[test]
fn completed_trick_is_immutable() {
    let order = PlayOrder::from_leader(0).unwrap();
    let mut trick = Trick::new(order, Suit::Hearts);
    play_all(&mut trick, &["7C", "KC", "2H", "3C"]);
    let winner_before = trick.winner().unwrap();

    let extra = CardFixtures::parse_hardcoded(&["AS"]);
    let err = trick.play(0, extra[0]).unwrap_err();
    assert_eq!(*err.kind(), ValidationKind::TrickAlreadyDone);
    // A rejected play never alters the outcome
    assert_eq!(trick.winner().unwrap(), winner_before);
    assert_eq!(trick.plays().len(), 4);
}

use draw_poker::deck::{Deck, DeckError};
use draw_poker::hand::{Hand, HandError};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn fresh_deck_yields_52_distinct_then_fails() {
    let mut deck = Deck::new();
    let mut seen = HashSet::new();
    for _ in 0..52 {
        assert!(seen.insert(deck.draw().unwrap()));
    }
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn replace_out_of_range_is_rejected() {
    let mut deck = Deck::seeded(4);
    let mut hand = Hand::deal(&mut deck).unwrap();
    let before = hand;
    assert_eq!(hand.replace(5, &mut deck), Err(HandError::IndexOutOfRange(5)));
    assert_eq!(hand, before);
    assert_eq!(deck.remaining(), 47);
}

#[test]
fn replace_on_empty_deck_fails_cleanly() {
    let mut deck = Deck::seeded(4);
    let mut hand = Hand::deal(&mut deck).unwrap();
    let rest = deck.remaining();
    deck.draw_n(rest).unwrap();
    let before = hand;
    assert_eq!(hand.replace(0, &mut deck), Err(HandError::Deck(DeckError::Empty)));
    assert_eq!(hand, before);
}

proptest! {
    #[test]
    fn replace_keeps_the_hand_sorted(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 0..4)) {
        let mut deck = Deck::seeded(seed);
        let mut hand = Hand::deal(&mut deck).unwrap();
        hand.replace_many(&picks, &mut deck).unwrap();
        prop_assert!(hand.cards().windows(2).all(|w| w[0].rank() <= w[1].rank()));
        let unique: HashSet<_> = picks.iter().collect();
        prop_assert_eq!(deck.remaining(), 47 - unique.len());
        let distinct: HashSet<_> = hand.cards().iter().collect();
        prop_assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn seeded_decks_replay(seed in any::<u64>()) {
        let mut a = Deck::seeded(seed);
        let mut b = Deck::seeded(seed);
        prop_assert_eq!(a.draw_n(10).unwrap(), b.draw_n(10).unwrap());
    }
}

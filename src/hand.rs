use crate::cards::{parse_cards, Card};
use crate::deck::{Deck, DeckError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards dealt to each participant.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    InvalidSize(usize),
    #[error("card index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards held by one participant, always sorted ascending by rank.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::hand::Hand;
///
/// let mut deck = Deck::seeded(9);
/// let hand = Hand::deal(&mut deck).unwrap();
/// assert_eq!(deck.remaining(), 47);
/// assert!(hand.cards().windows(2).all(|w| w[0].rank() <= w[1].rank()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Draw five cards from `deck` and sort them.
    pub fn deal(deck: &mut Deck) -> Result<Self, HandError> {
        let drawn = deck.draw_n(HAND_SIZE)?;
        Self::try_new(&drawn)
    }

    /// Build a hand from exactly five distinct cards, in any order.
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::InvalidSize(cards.len()))?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateCard(*dup));
        }
        let mut hand = Self { cards };
        hand.sort();
        Ok(hand)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Swap the card at `index` for a fresh one from `deck`, then re-sort.
    pub fn replace(&mut self, index: usize, deck: &mut Deck) -> Result<(), HandError> {
        self.replace_many(&[index], deck)
    }

    /// Replace every listed position against the current order, sorting once at the end.
    ///
    /// Indices are validated and the deck checked for enough cards before any
    /// card is drawn, so a failure leaves both hand and deck untouched.
    pub fn replace_many(&mut self, indices: &[usize], deck: &mut Deck) -> Result<(), HandError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= HAND_SIZE) {
            return Err(HandError::IndexOutOfRange(bad));
        }
        let unique: HashSet<usize> = indices.iter().copied().collect();
        if unique.len() > deck.remaining() {
            return Err(HandError::Deck(DeckError::Empty));
        }
        let mut positions: Vec<usize> = unique.into_iter().collect();
        positions.sort_unstable();
        for i in positions {
            self.cards[i] = deck.draw()?;
        }
        self.sort();
        Ok(())
    }

    fn sort(&mut self) {
        self.cards.sort_by(|a, b| a.compare(*b));
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn is_sorted(hand: &Hand) -> bool {
        hand.cards().windows(2).all(|w| w[0].rank() <= w[1].rank())
    }

    #[test]
    fn try_new_sorts_and_validates() {
        let hand: Hand = "As 2h Kd 7c 7s".parse().unwrap();
        assert!(is_sorted(&hand));
        assert_eq!(hand.cards()[0], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(hand.cards()[4], Card::new(Rank::Ace, Suit::Spades));

        assert!(matches!("As 2h Kd".parse::<Hand>(), Err(HandError::InvalidSize(3))));
        assert!(matches!(
            "As As Kd 7c 7s".parse::<Hand>(),
            Err(HandError::DuplicateCard(c)) if c == Card::new(Rank::Ace, Suit::Spades)
        ));
        assert!(matches!("As Xx Kd 7c 7s".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn replace_keeps_hand_sorted() {
        let mut deck = Deck::seeded(11);
        let mut hand = Hand::deal(&mut deck).unwrap();
        for i in 0..HAND_SIZE {
            hand.replace(i, &mut deck).unwrap();
            assert!(is_sorted(&hand));
        }
        assert_eq!(deck.remaining(), 52 - 10);
    }

    #[test]
    fn replace_rejects_bad_index_without_drawing() {
        let mut deck = Deck::seeded(5);
        let mut hand = Hand::deal(&mut deck).unwrap();
        let before = hand;
        assert_eq!(hand.replace(5, &mut deck), Err(HandError::IndexOutOfRange(5)));
        assert_eq!(hand, before);
        assert_eq!(deck.remaining(), 47);
    }

    #[test]
    fn replace_many_checks_deck_before_drawing() {
        let mut deck = Deck::seeded(5);
        let mut hand = Hand::deal(&mut deck).unwrap();
        deck.draw_n(45).unwrap();
        assert_eq!(deck.remaining(), 2);
        let before = hand;
        assert_eq!(hand.replace_many(&[0, 1, 2], &mut deck), Err(HandError::Deck(DeckError::Empty)));
        assert_eq!(hand, before);
        assert_eq!(deck.remaining(), 2);

        hand.replace_many(&[0, 1, 1], &mut deck).unwrap();
        assert!(deck.is_empty());
        assert_eq!(hand.replace(0, &mut deck), Err(HandError::Deck(DeckError::Empty)));
    }
}

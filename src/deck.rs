use crate::cards::{Card, Rank, Suit};
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// A standard 52-card deck that deals without replacement.
///
/// Each draw picks uniformly among the cards still in the deck, so there is no
/// shuffle step. The random source is owned by the deck and can be injected.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// A full deck drawing from a freshly seeded RNG.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.remaining(), 52);
    /// ```
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// A full deck whose draws are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards, rng }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, in no particular order.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return one card chosen uniformly among those remaining.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let idx = self.rng.random_range(0..self.cards.len());
        let card = self.cards.swap_remove(idx);
        trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Draw `n` cards, failing without drawing anything if fewer remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::Empty);
        }
        (0..n).map(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

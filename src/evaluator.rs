pub(crate) mod detector;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HAND_SIZE};
use core::cmp::Ordering;
use detector::{Cards, DETECTORS};
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// Cards ranked at or above this are worth keeping even when they are not part
/// of the hand's combination.
pub const KICKER_THRESHOLD: Rank = Rank::Ten;

/// Keep-flags aligned with the sorted order of the evaluated hand.
pub type ValuableMask = [bool; HAND_SIZE];

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Triple = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::Triple,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Category> {
        Category::ALL.get(usize::from(ordinal)).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::Triple => "Triple",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluation of one five-card hand. Ordering and equality follow `score()`.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub tiebreak: Rank,
    pub valuable: ValuableMask,
}

impl Evaluation {
    /// `category * 100 + tiebreak`, in `0..=912`.
    pub const fn score(&self) -> u16 {
        self.category.ordinal() as u16 * 100 + self.tiebreak.ordinal() as u16
    }

    pub fn is_valuable(&self, index: usize) -> bool {
        self.valuable.get(index).copied().unwrap_or(false)
    }

    /// Positions not marked valuable: what a refresh should throw away.
    pub fn discards(&self) -> Vec<usize> {
        (0..HAND_SIZE).filter(|&i| !self.valuable[i]).collect()
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.score() == other.score()
    }
}

impl Eq for Evaluation {}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.tiebreak)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    InvalidHandSize(usize),
    #[error("cards must be sorted ascending by rank")]
    UnsortedHand,
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Evaluate a hand. `Hand` keeps its cards sorted, so this cannot fail.
///
/// ```
/// use draw_poker::evaluator::{evaluate, Category};
/// use draw_poker::hand::Hand;
///
/// let hand: Hand = "10s Js Qs Ks As".parse().unwrap();
/// let eval = evaluate(&hand);
/// assert_eq!(eval.category, Category::RoyalFlush);
/// assert_eq!(eval.score(), 912);
/// ```
pub fn evaluate(hand: &Hand) -> Evaluation {
    classify(hand.cards())
}

/// Evaluate a raw card slice.
///
/// Unlike [`Hand`], this does not sort: the caller must pass exactly five
/// distinct cards already ordered ascending by rank, or get an error back.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let cards: &Cards = cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    if cards.windows(2).any(|w| w[0].rank() > w[1].rank()) {
        return Err(EvalError::UnsortedHand);
    }
    let mut seen = HashSet::with_capacity(HAND_SIZE);
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }
    Ok(classify(cards))
}

/// Compare two evaluations by score. Any number of hands can be ranked this way.
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}

fn classify(cards: &Cards) -> Evaluation {
    let (category, hit) = DETECTORS
        .iter()
        .find_map(|d| d.detect(cards).map(|hit| (d.category(), hit)))
        .unwrap_or_else(|| (Category::HighCard, detector::high_card(cards)));
    let eval = Evaluation { category, tiebreak: hit.tiebreak, valuable: hit.valuable };
    debug!("evaluated [{}] as {eval}, score {}", display_cards(cards), eval.score());
    eval
}

fn display_cards(cards: &Cards) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

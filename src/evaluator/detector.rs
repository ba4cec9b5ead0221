use super::{Category, ValuableMask, KICKER_THRESHOLD};
use crate::cards::{Card, Rank};
use crate::hand::HAND_SIZE;

pub(super) type Cards = [Card; HAND_SIZE];

/// What a successful category check commits: the tie-break rank and the keep-mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Detection {
    pub(super) tiebreak: Rank,
    pub(super) valuable: ValuableMask,
}

/// One category check over a rank-sorted hand.
///
/// Implementations are pure: everything they compute lives in the returned
/// `Detection`, and a failed check leaves nothing behind for the next one.
pub(super) trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, cards: &Cards) -> Option<Detection>;
}

/// Detectors in priority order: highest to lowest. The first hit wins.
pub(super) const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &TripleDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];

// ============================================================================
// Detector Implementations
// ============================================================================

/// Royal Flush: a straight flush topped by an Ace
pub(super) struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let top = top_rank(cards);
        (is_flush(cards) && is_straight(cards) && top == Rank::Ace).then(|| all_valuable(top))
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub(super) struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        (is_flush(cards) && is_straight(cards)).then(|| all_valuable(top_rank(cards)))
    }
}

/// Four of a Kind: four cards of the same rank
pub(super) struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let (rank, idx) = find_quad(cards)?;
        Some(with_kickers(cards, rank, &idx))
    }

    fn category(&self) -> Category {
        Category::FourOfAKind
    }
}

/// Full House: a triple plus a pair of a different rank
pub(super) struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let (triple, _) = find_triple(cards)?;
        find_pair(cards, Some(triple))?;
        Some(all_valuable(triple))
    }
}

/// Flush: all five cards of the same suit
pub(super) struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        is_flush(cards).then(|| all_valuable(top_rank(cards)))
    }
}

/// Straight: five consecutive ranks, Ace high only
pub(super) struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        is_straight(cards).then(|| all_valuable(top_rank(cards)))
    }
}

pub(super) struct TripleDetector;

impl CategoryDetector for TripleDetector {
    fn category(&self) -> Category {
        Category::Triple
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let (rank, idx) = find_triple(cards)?;
        Some(with_kickers(cards, rank, &idx))
    }
}

/// Two Pair: the lowest pair, then a second pair found while skipping the first's rank.
/// On a sorted hand the second search lands on the higher pair, which is the tie-break.
pub(super) struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let (low, low_idx) = find_pair(cards, None)?;
        let (high, high_idx) = find_pair(cards, Some(low))?;
        let idx = [low_idx[0], low_idx[1], high_idx[0], high_idx[1]];
        Some(with_kickers(cards, high, &idx))
    }
}

pub(super) struct PairDetector;

impl CategoryDetector for PairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        let (rank, idx) = find_pair(cards, None)?;
        Some(with_kickers(cards, rank, &idx))
    }
}

/// High Card: always matches; keeps the top card.
pub(super) struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, cards: &Cards) -> Option<Detection> {
        Some(high_card(cards))
    }
}

pub(super) fn high_card(cards: &Cards) -> Detection {
    with_kickers(cards, top_rank(cards), &[HAND_SIZE - 1])
}

// ============================================================================
// Shared scans
// ============================================================================

fn top_rank(cards: &Cards) -> Rank {
    cards[HAND_SIZE - 1].rank()
}

fn is_flush(cards: &Cards) -> bool {
    cards.iter().all(|c| c.suit() == cards[0].suit())
}

fn is_straight(cards: &Cards) -> bool {
    cards.windows(2).all(|w| w[1].rank().ordinal() == w[0].rank().ordinal() + 1)
}

fn all_valuable(tiebreak: Rank) -> Detection {
    Detection { tiebreak, valuable: [true; HAND_SIZE] }
}

/// Mark `defining` plus every other card ranked at or above the kicker threshold.
fn with_kickers(cards: &Cards, tiebreak: Rank, defining: &[usize]) -> Detection {
    let mut valuable = [false; HAND_SIZE];
    for &i in defining {
        valuable[i] = true;
    }
    for (keep, card) in valuable.iter_mut().zip(cards) {
        if card.rank() >= KICKER_THRESHOLD {
            *keep = true;
        }
    }
    Detection { tiebreak, valuable }
}

/// First pair in ascending (i, j) index order whose rank is not `ignore`.
pub(super) fn find_pair(cards: &Cards, ignore: Option<Rank>) -> Option<(Rank, [usize; 2])> {
    for i in 0..HAND_SIZE {
        let rank = cards[i].rank();
        if ignore == Some(rank) {
            continue;
        }
        for j in (i + 1)..HAND_SIZE {
            if cards[j].rank() == rank {
                return Some((rank, [i, j]));
            }
        }
    }
    None
}

fn find_triple(cards: &Cards) -> Option<(Rank, [usize; 3])> {
    for i in 0..HAND_SIZE {
        for j in (i + 1)..HAND_SIZE {
            for k in (j + 1)..HAND_SIZE {
                let rank = cards[i].rank();
                if cards[j].rank() == rank && cards[k].rank() == rank {
                    return Some((rank, [i, j, k]));
                }
            }
        }
    }
    None
}

fn find_quad(cards: &Cards) -> Option<(Rank, [usize; 4])> {
    for skip in 0..HAND_SIZE {
        let mut idx = [0usize; 4];
        let mut n = 0;
        for i in (0..HAND_SIZE).filter(|&i| i != skip) {
            idx[n] = i;
            n += 1;
        }
        let rank = cards[idx[0]].rank();
        if idx.iter().all(|&i| cards[i].rank() == rank) {
            return Some((rank, idx));
        }
    }
    None
}

use crate::deck::Deck;
use crate::evaluator::{evaluate, Evaluation};
use crate::hand::{Hand, HandError};
use crate::policy;
use log::debug;
use std::fmt;

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Computer,
    Human,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Computer, Seat::Human];

    pub const fn index(self) -> usize {
        match self {
            Seat::Computer => 0,
            Seat::Human => 1,
        }
    }

    pub const fn other(self) -> Seat {
        match self {
            Seat::Computer => Seat::Human,
            Seat::Human => Seat::Computer,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Seat::Computer => "Computer",
            Seat::Human => "You",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand plus a coin balance. The balance survives across rounds; the hand
/// and its evaluation are replaced every deal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Participant {
    pub(crate) seat: Seat,
    pub(crate) hand: Hand,
    pub(crate) coins: i64,
    pub(crate) evaluation: Evaluation,
}

impl Participant {
    pub fn new(seat: Seat, hand: Hand, coins: i64) -> Self {
        let evaluation = evaluate(&hand);
        Self { seat, hand, coins, evaluation }
    }

    /// Returns which seat this participant occupies
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the current hand
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the coin balance; zero or below means eliminated
    pub fn coins(&self) -> i64 {
        self.coins
    }

    /// Returns the evaluation of the current hand
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn score(&self) -> u16 {
        self.evaluation.score()
    }

    pub fn can_open(&self) -> bool {
        policy::can_open(&self.evaluation)
    }

    pub fn is_valuable(&self, index: usize) -> bool {
        self.evaluation.is_valuable(index)
    }

    pub fn is_broke(&self) -> bool {
        self.coins <= 0
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
        self.evaluation = evaluate(&self.hand);
    }

    /// Swap the listed positions for fresh cards and re-evaluate.
    pub(crate) fn replace_cards(
        &mut self,
        indices: &[usize],
        deck: &mut Deck,
    ) -> Result<(), HandError> {
        self.hand.replace_many(indices, deck)?;
        self.evaluation = evaluate(&self.hand);
        debug!(
            "{} replaced {} card(s): {} -> {}",
            self.seat,
            indices.len(),
            self.hand,
            self.evaluation
        );
        Ok(())
    }

    pub(crate) fn pay(&mut self, amount: i64) {
        self.coins -= amount;
    }

    pub(crate) fn collect(&mut self, amount: i64) {
        self.coins += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_cards_reevaluates() {
        let mut deck = Deck::seeded(21);
        let hand = Hand::deal(&mut deck).unwrap();
        let mut p = Participant::new(Seat::Human, hand, 10);
        let discards = p.evaluation().discards();
        p.replace_cards(&discards, &mut deck).unwrap();
        assert_eq!(p.evaluation().score(), evaluate(p.hand()).score());
        assert_eq!(p.evaluation().valuable, evaluate(p.hand()).valuable);
        assert_eq!(deck.remaining(), 47 - discards.len());
    }

    #[test]
    fn balance_changes_and_elimination() {
        let hand: Hand = "Jc Jd 2h 3s 5c".parse().unwrap();
        let mut p = Participant::new(Seat::Computer, hand, 1);
        assert!(p.can_open());
        p.pay(1);
        assert!(p.is_broke());
        p.collect(3);
        assert_eq!(p.coins(), 3);
        assert!(!p.is_broke());
    }

    #[test]
    fn seats_pair_up() {
        assert_eq!(Seat::Computer.other(), Seat::Human);
        assert_eq!(Seat::Human.index(), 1);
        assert_eq!(Seat::Human.to_string(), "You");
    }
}

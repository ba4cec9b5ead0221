//! Fixed decision rules for the computer seat.
//!
//! Every rule is a pure function of an evaluation score. The call decision
//! is made on the hand the computer held before the refresh.
//! There is no bluffing, no adaptation and no bet sizing.

use crate::evaluator::Evaluation;

/// Minimum score needed to open a round: a pair of Jacks.
pub const OPEN_THRESHOLD: u16 = 109;
/// Minimum score the computer needs to call a bet: two pair.
pub const CALL_THRESHOLD: u16 = 200;
/// Largest bet the human may place.
pub const MAX_BET: i64 = 3;
/// Most cards either side may swap during a refresh.
pub const MAX_DISCARDS: usize = 4;

/// Whether a hand is strong enough to open. Applies to both seats.
pub fn can_open(eval: &Evaluation) -> bool {
    eval.score() >= OPEN_THRESHOLD
}

/// Whether the computer calls a bet rather than folding.
pub fn calls_bet(eval: &Evaluation) -> bool {
    eval.score() >= CALL_THRESHOLD
}

/// Positions the computer throws away: everything its evaluation did not mark
/// valuable. A High Card hand always keeps its top card, so this never exceeds
/// `MAX_DISCARDS`.
pub fn discards(eval: &Evaluation) -> Vec<usize> {
    let mut out = eval.discards();
    out.truncate(MAX_DISCARDS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::hand::Hand;

    fn eval(s: &str) -> Evaluation {
        evaluate(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn open_threshold_is_pair_of_jacks() {
        assert!(!can_open(&eval("10c 10d 2h 3s 5c")));
        assert!(can_open(&eval("Jc Jd 2h 3s 5c")));
        assert!(can_open(&eval("2c 2d 3h 3s 5c")));
    }

    #[test]
    fn calls_with_two_pair_or_better() {
        assert!(!calls_bet(&eval("Ac Ad 2h 3s 5c")));
        assert!(calls_bet(&eval("2c 2d 3h 3s 5c")));
        assert!(calls_bet(&eval("5s 6d 7h 8s 9c")));
    }

    #[test]
    fn discards_skip_valuable_cards() {
        assert_eq!(discards(&eval("2s 5h 6d 6s 9c")), vec![0, 1, 4]);
        assert_eq!(discards(&eval("2s 4h 6d 7s 9c")), vec![0, 1, 2, 3]);
        assert!(discards(&eval("5s 6d 7h 8s 9c")).is_empty());
    }
}

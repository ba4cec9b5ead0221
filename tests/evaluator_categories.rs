use draw_poker::cards::{parse_cards, Rank};
use draw_poker::evaluator::{compare, evaluate, evaluate_cards, Category, EvalError};
use draw_poker::hand::Hand;
use std::cmp::Ordering;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

#[test]
fn royal_flush_scores_912() {
    let e = evaluate(&hand("♠10 ♠J ♠Q ♠K ♠A"));
    assert_eq!(e.category, Category::RoyalFlush);
    assert_eq!(e.tiebreak, Rank::Ace);
    assert_eq!(e.score(), 912);
    assert_eq!(e.valuable, [true; 5]);
}

#[test]
fn straight_scores_408() {
    let e = evaluate(&hand("♠5 ♡6 ♢7 ♠8 ♣9"));
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tiebreak.ordinal(), 8);
    assert_eq!(e.score(), 408);
    assert_eq!(e.valuable, [true; 5]);
}

#[test]
fn full_house_tiebreak_is_the_triple() {
    let e = evaluate(&hand("♠10 ♡10 ♣10 ♢K ♠K"));
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.tiebreak, Rank::Ten);
    assert_eq!(e.score(), 608);
    assert_eq!(e.valuable, [true; 5]);

    // triple ranked above the pair
    let e = evaluate(&hand("4s 4d Kc Kh Ks"));
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.tiebreak, Rank::King);
}

#[test]
fn pair_marks_only_the_pair_below_ten() {
    let e = evaluate(&hand("♠2 ♡5 ♢6 ♠6 ♣9"));
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.tiebreak, Rank::Six);
    assert_eq!(e.score(), 104);
    assert_eq!(e.valuable, [false, false, true, true, false]);
}

#[test]
fn high_kickers_are_kept() {
    let e = evaluate(&hand("3c 3d 7h Jh As"));
    assert_eq!(e.category, Category::Pair);
    assert_eq!(e.valuable, [true, true, false, true, true]);

    let e = evaluate(&hand("2c 4d 7h 9h Qs"));
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.score(), 10);
    assert_eq!(e.valuable, [false, false, false, false, true]);
}

#[test]
fn two_pair_reports_the_higher_pair() {
    let e = evaluate(&hand("4c 4d 8h 8s Kc"));
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(e.tiebreak, Rank::Eight);
    assert_eq!(e.score(), 206);
    assert_eq!(e.valuable, [true; 5]);
}

#[test]
fn flush_beats_straight_and_ace_low_is_not_a_straight() {
    let flush = evaluate(&hand("2h 5h 8h 9h Jh"));
    let straight = evaluate(&hand("9s 10d Jc Qh Ks"));
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(straight.category, Category::Straight);
    assert_eq!(compare(&flush, &straight), Ordering::Greater);

    let wheel = evaluate(&hand("As 2d 3c 4h 5s"));
    assert_eq!(wheel.category, Category::HighCard);

    let steel = evaluate(&hand("Ah 2h 3h 4h 5h"));
    assert_eq!(steel.category, Category::Flush);
}

#[test]
fn straight_flush_below_royal() {
    let e = evaluate(&hand("9d 10d Jd Qd Kd"));
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.score(), 811);
}

#[test]
fn four_of_a_kind_with_high_kicker() {
    let e = evaluate(&hand("7c 7d 7h 7s Ad"));
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.score(), 705);
    assert_eq!(e.valuable, [true; 5]);
}

#[test]
fn raw_slices_are_validated() {
    let cards = parse_cards("2s 5h 6d").unwrap();
    assert_eq!(evaluate_cards(&cards), Err(EvalError::InvalidHandSize(3)));
    let unsorted = parse_cards("Ks 5h 6d 6s 9c").unwrap();
    assert_eq!(evaluate_cards(&unsorted), Err(EvalError::UnsortedHand));
    let sorted = parse_cards("5h 6d 6s 9c Ks").unwrap();
    assert_eq!(evaluate_cards(&sorted).unwrap().score(), 104);
}

#[test]
fn category_names_cover_all_ten() {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        [
            "High Card",
            "Pair",
            "Two Pair",
            "Triple",
            "Straight",
            "Flush",
            "Full House",
            "Four of a Kind",
            "Straight Flush",
            "Royal Flush"
        ]
    );
}

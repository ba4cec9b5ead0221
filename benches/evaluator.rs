use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use draw_poker::cards::{Card, Rank, Suit};
use draw_poker::deck::Deck;
use draw_poker::evaluator::{evaluate, evaluate_cards};
use draw_poker::hand::Hand;

fn bench_evaluate_cards(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Hearts),
    ];
    let royal = [
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ace, Suit::Spades),
    ];

    let mut g = c.benchmark_group("evaluate_cards");
    g.bench_with_input(BenchmarkId::new("high_card", "2,5,7,K,A"), &hi, |b, input| {
        b.iter(|| evaluate_cards(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "10-A"), &royal, |b, input| {
        b.iter(|| evaluate_cards(black_box(input)))
    });
    g.finish();
}

fn bench_deal_and_evaluate(c: &mut Criterion) {
    c.bench_function("deal_and_evaluate", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut deck = Deck::seeded(seed);
            Hand::deal(&mut deck).map(|h| evaluate(black_box(&h)))
        })
    });
}

criterion_group!(benches, bench_evaluate_cards, bench_deal_and_evaluate);
criterion_main!(benches);

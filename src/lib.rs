//! draw-poker: two-party five-card draw poker
//!
//! The core is a pure hand evaluator plus a round state machine that plays the
//! human against a fixed computer policy:
//! - Deterministic when seeded; every deck draws from an injected ChaCha RNG
//! - Every rule violation comes back as a `Result`, never a panic
//! - A terminal front end built on the same public API
//!
//! ## Quick start: evaluate a hand
//! ```
//! use draw_poker::evaluator::{evaluate, Category};
//! use draw_poker::hand::Hand;
//!
//! let hand: Hand = "10s 10h 10c Kd Ks".parse().unwrap();
//! let eval = evaluate(&hand);
//! assert_eq!(eval.category, Category::FullHouse);
//! assert_eq!(eval.score(), 608);
//! assert!(eval.valuable.iter().all(|&v| v));
//! ```
//!
//! ## Quick start: play a round
//! ```
//! use draw_poker::game::{Game, GameConfig, Phase};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
//! while game.phase() != Phase::OpenCheck {
//!     game.next_round().unwrap();
//! }
//! game.open().unwrap();
//! game.refresh(&[]).unwrap();
//! game.check().unwrap();
//! assert_eq!(game.pot(), 0);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod player;
pub mod policy;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

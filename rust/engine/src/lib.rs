//! # sushigo-engine: Sushi Go Scoring Rules
//!
//! A pure rules library for the Sushi Go card-drafting game: deck
//! construction, the per-player hand container, and the arithmetic that
//! turns played cards into points. Turn order, player input and game state
//! belong to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - The twelve card kinds and their deck multiplicities
//! - [`deck`] - Shuffled decks, either from thread randomness or a seeded ChaCha20 RNG
//! - [`hand`] - A player's mutable hand of cards
//! - [`rules`] - Player-count validation and hand sizes
//! - [`scoring`] - Combo scoring for one played sequence
//! - [`round`] - Maki majority plus combo scoring for every hand in a round
//! - [`pudding`] - End-of-game pudding majority and minority
//! - [`errors`] - Error types for rules operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sushigo_engine::cards::Card::*;
//! use sushigo_engine::round::calc_round;
//! use sushigo_engine::pudding::calc_puddings;
//!
//! let played = vec![
//!     vec![MakiRoll, Tempura, Tempura, Pudding],
//!     vec![TwoMakiRoll, Wasabi, SquidNigiri],
//! ];
//! assert_eq!(calc_round(&played), vec![3 + 5, 6 + 9]);
//! assert_eq!(calc_puddings(&played), vec![6, -6]);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use sushigo_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(7);
//! let mut d2 = Deck::new_with_seed(7);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.deal_hands(3).unwrap(), d2.deal_hands(3).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod pudding;
pub mod round;
pub mod rules;
pub mod scoring;

pub use cards::{Card, DECK_SIZE};
pub use deck::{get_deck, Deck};
pub use errors::RulesError;
pub use hand::Hand;
pub use pudding::calc_puddings;
pub use round::calc_round;
pub use rules::hand_size;
pub use scoring::{calc_score, pudding_count, ScoreBreakdown};

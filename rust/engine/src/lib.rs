//! # fivecard-engine: Five-Card Draw Engine Core
//!
//! A deterministic two-player five-card-draw poker engine. Each player is
//! dealt five cards, exchanges up to five of them exactly once (player one
//! first), and the two final hands are compared with the standard ranking
//! ladder and tie-break rules.
//!
//! The engine does no I/O and keeps no state between calls: every entry
//! point maps an explicit [`game::GameState`] to a new one.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card ids
//! - [`deck`] - Ordered deck with shuffle and all-or-nothing draws
//! - [`hand`] - Five-card hands, hand classification and comparison
//! - [`player`] - Player ids and per-player seats
//! - [`game`] - Game state, phases and results
//! - [`rules`] - Card exchange validation
//! - [`engine`] - `new_game`, `make_move` and `forfeit` transitions
//! - [`codec`] - Versioned JSON transport encoding
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fivecard_engine::engine::{make_move, new_game};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let game = new_game("alice", "bob", &mut rng).unwrap();
//!
//! // alice swaps her first two cards, bob stands pat
//! let discard = game.player_one_hand().ids();
//! let (game, alice_final) = make_move(&game, "alice", &discard[..2]).unwrap();
//! let (game, bob_final) = make_move(&game, "bob", Vec::<String>::new()).unwrap();
//!
//! assert!(game.is_finished());
//! println!("alice: {} / bob: {}", alice_final, bob_final);
//! ```
//!
//! ## Hand Comparison
//!
//! ```rust
//! use fivecard_engine::cards::Card;
//! use fivecard_engine::hand::{evaluate, Hand, Outcome};
//!
//! let hand = |ids: [&str; 5]| {
//!     Hand::new(ids.iter().map(|id| Card::from_id(id).unwrap()).collect()).unwrap()
//! };
//! let wheel = hand(["spade_ace", "heart_two", "diamond_three", "club_four", "spade_five"]);
//! let six_high = hand(["spade_six", "heart_seven", "diamond_eight", "club_nine", "spade_ten"]);
//! assert_eq!(evaluate(&wheel, &six_high), Outcome::SecondWins);
//! ```

pub mod cards;
pub mod codec;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;

//! A turn-based card game engine with pluggable win rules and optional
//! `no_std` support.
//!
//! A fixed deck of numbered cards is split evenly among a required number of
//! players, every round each player reveals one card, and a [`rules`] function
//! decides who takes the round. Each round won is worth one point; the player
//! with the highest total wins the game.
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions, Player, rules};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut game = Game::new(GameOptions::default(), rules::highest_card, 42)?;
//! game.add_player(Player::new("Alice", &mut rng))?;
//! game.add_player(Player::new("Bob", &mut rng))?;
//!
//! game.deal()?;
//! let rounds = game.play_remaining_rounds()?;
//! assert_eq!(rounds.len(), 26);
//! assert!(game.score_card().winner.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, Deck};
pub use error::{AssignError, ConfigError, DealError, JoinError, PlayError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use result::{PlayedCard, Round, Score, ScoreCard};
pub use rules::{WinnerRule, highest_card, lowest_card};

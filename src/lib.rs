//! A King or Koos card game engine with optional `no_std` support.
//!
//! King or Koos is a shedding game: each round players take turns playing
//! one or more cards of a single rank that beat the top of the pile, or
//! passing. The first player to empty their hand is the king and the last
//! one left holding cards is the koos.
//!
//! The crate provides a [`Game`] type that manages seating, rounds, and the
//! finishing order, and the pure [`rules`] it applies to each play.
//!
//! # Example
//!
//! ```
//! use kingorkoos::{Game, GameOptions, TurnPrompt};
//!
//! let game = Game::new(GameOptions::default(), 7);
//! game.join("Audrey").unwrap();
//! game.join("Jesse").unwrap();
//!
//! // Always lead with the lowest card, otherwise pass.
//! let mut lowest = |prompt: &TurnPrompt| {
//!     let lead = prompt.required_count.is_none();
//!     Some(if lead {
//!         prompt.player.hand().cards()[..1].to_vec()
//!     } else {
//!         Vec::new()
//!     })
//! };
//! let ranking = game.run(&mut lowest, &mut ()).unwrap();
//! assert_ne!(ranking.king, ranking.koos);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod pile;
pub mod player;
pub mod result;
pub mod rules;
pub mod selection;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, STARTING_CARD, Suit, TOP_RANK};
pub use deck::Deck;
pub use error::{DealError, JoinError, ParseError, PlayError, RosterError, RunError};
pub use game::{Game, GameState, TurnOutcome};
pub use hand::Hand;
pub use input::{TableView, TurnInput, TurnPrompt};
pub use options::GameOptions;
pub use pile::{PileEntry, RoundPile};
pub use player::{Player, PlayerId};
pub use result::Ranking;

//! A Pasientza solitaire engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the draw pile, the waste pile
//! ("soros"), and eight foundations, and implements the draw-three mechanic,
//! foundation placement, single-use undo, replay, and win detection.
//! Rendering is left to the host, which identifies cards by [`Card::id`].
//!
//! # Example
//!
//! ```
//! use pasientza::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.draw_three();
//! let _ = game.attempt_move_to_foundation(0);
//! assert!(!game.is_won());
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
pub mod foundation;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, KING, Suit};
pub use deck::Deck;
pub use error::{InvalidCard, InvalidMove};
pub use foundation::FoundationPile;
pub use game::{DRAW_COUNT, FOUNDATION_COUNT, Game, GameState};
pub use options::{GameOptions, MAX_DECKS, MIN_DECKS};
pub use result::DrawResult;

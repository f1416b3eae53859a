//! Error types for card construction and foundation moves.

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCard {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}")]
    Rank(u8),
    /// Unknown suit letter.
    #[error("invalid suit {0:?}")]
    Suit(char),
    /// Malformed identity key.
    #[error("malformed card id")]
    Id,
}

/// Errors that can occur when placing a card on a foundation.
///
/// These are expected during play. When returned from the game, the card has
/// already been put back on the waste pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// No foundation with this index.
    #[error("foundation {0} not found")]
    FoundationNotFound(usize),
    /// An empty foundation only accepts the starting rank.
    #[error("foundation must start with an ace, got rank {rank}")]
    WrongStartingRank {
        /// Rank of the rejected card.
        rank: u8,
    },
    /// The card does not match the foundation's suit.
    #[error("foundation holds {expected:?}, got {found:?}")]
    SuitMismatch {
        /// Suit the foundation is bound to.
        expected: Suit,
        /// Suit of the rejected card.
        found: Suit,
    },
    /// The card is not exactly one rank above the top card.
    #[error("rank {found} does not follow {top}")]
    RankNotNext {
        /// Rank of the foundation's top card.
        top: u8,
        /// Rank of the rejected card.
        found: u8,
    },
}

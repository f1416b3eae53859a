//! Card types and identity keys.

use alloc::string::String;
use core::fmt;

use crate::error::InvalidCard;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in base deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the lowercase letter used in a card's identity key.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    /// Parses a suit letter as produced by [`Suit::symbol`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard::Suit`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, InvalidCard> {
        match symbol {
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            'c' => Ok(Self::Clubs),
            's' => Ok(Self::Spades),
            other => Err(InvalidCard::Suit(other)),
        }
    }
}

/// Lowest rank; every foundation starts here.
pub const ACE: u8 = 1;

/// Highest rank.
pub const KING: u8 = 13;

/// Number of cards in one physical deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are plain values. Two cards compare equal when rank and suit match,
/// so the two copies of a card in a doubled deck are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard::Rank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::{Card, Suit};
    ///
    /// let ten = Card::new(Suit::Spades, 10).unwrap();
    /// assert_eq!(ten.id(), "10s");
    /// assert!(Card::new(Suit::Spades, 14).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, InvalidCard> {
        if rank < ACE || rank > KING {
            return Err(InvalidCard::Rank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Builds a card whose rank the caller has already checked.
    pub(crate) const fn from_valid(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Parses an identity key such as `"10s"` or `"1h"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard::Id`] if the key is malformed (including a rank
    /// with a leading zero), or the rank/suit error if either part is out of
    /// range. Ranks too large for a `u8` are reported as rank 255.
    pub fn from_id(id: &str) -> Result<Self, InvalidCard> {
        let mut chars = id.chars();
        let symbol = chars.next_back().ok_or(InvalidCard::Id)?;
        let rank_part = chars.as_str();
        if rank_part.is_empty()
            || (rank_part.len() > 1 && rank_part.starts_with('0'))
            || !rank_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidCard::Id);
        }
        // All digits, so parsing only fails on overflow.
        let rank: u8 = rank_part.parse().unwrap_or(u8::MAX);
        Self::new(Suit::from_symbol(symbol)?, rank)
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the identity key used by hosts to look up card artwork.
    #[must_use]
    pub fn id(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

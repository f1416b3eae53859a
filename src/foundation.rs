//! Foundation piles ("suit decks").

use alloc::vec::Vec;

use crate::card::{ACE, Card, KING, Suit};
use crate::error::InvalidMove;

/// A pile built upward in one suit from Ace to King.
///
/// The suit is unbound while the pile is empty and is fixed by the first card
/// placed. Cards are never taken back off a foundation during play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundationPile {
    cards: Vec<Card>,
}

impl FoundationPile {
    /// Creates an empty, unbound foundation.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Checks whether `card` may be placed here, without placing it.
    ///
    /// # Errors
    ///
    /// Returns the reason the card would be rejected.
    pub fn accepts(&self, card: &Card) -> Result<(), InvalidMove> {
        let Some(top) = self.cards.last() else {
            if card.rank() != ACE {
                return Err(InvalidMove::WrongStartingRank { rank: card.rank() });
            }
            return Ok(());
        };

        if card.suit() != top.suit() {
            return Err(InvalidMove::SuitMismatch {
                expected: top.suit(),
                found: card.suit(),
            });
        }

        if card.rank() != top.rank() + 1 {
            return Err(InvalidMove::RankNotNext {
                top: top.rank(),
                found: card.rank(),
            });
        }

        Ok(())
    }

    /// Places a card on the foundation.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the pile untouched if the card is not the
    /// starting rank (empty pile) or not the next rank of the bound suit.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::{Card, FoundationPile, InvalidMove, Suit};
    ///
    /// let mut pile = FoundationPile::new();
    /// let five = Card::new(Suit::Hearts, 5).unwrap();
    /// assert_eq!(pile.push(five), Err(InvalidMove::WrongStartingRank { rank: 5 }));
    ///
    /// pile.push(Card::new(Suit::Hearts, 1).unwrap()).unwrap();
    /// assert_eq!(pile.suit(), Some(Suit::Hearts));
    /// ```
    pub fn push(&mut self, card: Card) -> Result<(), InvalidMove> {
        self.accepts(&card)?;
        self.cards.push(card);
        Ok(())
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn number_of_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile runs from Ace to King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.last().is_some_and(|top| top.rank() == KING)
    }

    /// Returns the suit the pile is bound to, if any.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(Card::suit)
    }

    /// Returns the top card.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Clears the pile and unbinds its suit.
    pub fn make_empty(&mut self) {
        self.cards.clear();
    }
}

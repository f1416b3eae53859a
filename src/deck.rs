//! Draw and waste piles.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};

/// An ordered stack of cards. The top of the pile is the end of the slice.
///
/// Used both as the draw pile and as the waste pile; neither imposes any
/// placement rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty pile.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile.
    ///
    /// If `full`, the pile holds every card of `decks` physical decks,
    /// shuffled with `rng`. Otherwise it is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// assert_eq!(Deck::new(true, 2, &mut rng).len(), 104);
    /// assert!(Deck::new(false, 2, &mut rng).is_empty());
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(full: bool, decks: u8, rng: &mut R) -> Self {
        if !full {
            return Self::empty();
        }
        let mut deck = Self::standard(decks);
        deck.shuffle(rng);
        deck
    }

    /// Creates an unshuffled pile of `decks` physical decks in base order:
    /// suit by suit, Ace to King, with the King of Spades on top.
    #[must_use]
    pub fn standard(decks: u8) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in ACE..=KING {
                    cards.push(Card::from_valid(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Creates a pile from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the pile in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Discards every card.
    ///
    /// The caller must already have moved the cards somewhere else.
    pub fn make_empty(&mut self) {
        self.cards.clear();
    }

    /// Reverses the pile in place.
    pub fn inverse(&mut self) {
        self.cards.reverse();
    }

    /// Returns up to `n` cards from the top, top card first.
    #[must_use]
    pub fn top_cards(&self, n: usize) -> Vec<Card> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

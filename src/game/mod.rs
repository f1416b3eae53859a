//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::foundation::FoundationPile;
use crate::options::GameOptions;

mod actions;
pub mod state;

pub use state::GameState;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 8;

/// Most cards moved by a single draw.
pub const DRAW_COUNT: usize = 3;

/// A Pasientza game: a draw pile, a waste pile ("soros"), and eight
/// foundations.
///
/// Every card of the construction set lives in exactly one of these piles.
/// Hosts drive the game through the command methods and redraw from the
/// query methods.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Face-down pile the player draws from.
    draw_pile: Deck,
    /// Face-up pile receiving drawn cards.
    waste_pile: Deck,
    /// Suit piles built up from Ace.
    foundations: [FoundationPile; FOUNDATION_COUNT],
    /// Cards moved to the waste pile by the most recent draw.
    cards_removed_last_round: usize,
    /// Whether the most recent draw turned the waste pile over first.
    last_draw_recycled: bool,
    /// Cleared by undo and by any foundation placement; set by a draw.
    undo_armed: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled draw pile.
    ///
    /// `options.decks` is clamped to one or two decks.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.draw_pile_len(), 104);
    /// assert!(game.is_waste_pile_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let options = options.normalized();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let draw_pile = Deck::new(true, options.decks, &mut rng);

        Self {
            options,
            draw_pile,
            waste_pile: Deck::empty(),
            foundations: [const { FoundationPile::new() }; FOUNDATION_COUNT],
            cards_removed_last_round: 0,
            last_draw_recycled: false,
            undo_armed: false,
            rng,
        }
    }

    /// Creates a game from an existing position.
    ///
    /// The caller is responsible for the piles together holding exactly one
    /// construction set. Only the card count is enforced: [`Game::is_won`]
    /// reports a win once [`GameOptions::card_count`] cards are on the
    /// foundations, without checking which cards they are. The seed drives
    /// later replays. The deck count is clamped as in [`Game::new`].
    #[must_use]
    pub fn from_piles(
        options: GameOptions,
        seed: u64,
        draw_pile: Deck,
        waste_pile: Deck,
        foundations: [FoundationPile; FOUNDATION_COUNT],
    ) -> Self {
        Self {
            options: options.normalized(),
            draw_pile,
            waste_pile,
            foundations,
            cards_removed_last_round: 0,
            last_draw_recycled: false,
            undo_armed: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Returns the waste pile.
    #[must_use]
    pub const fn waste_pile(&self) -> &Deck {
        &self.waste_pile
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_draw_pile_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Returns whether the waste pile is empty.
    #[must_use]
    pub fn is_waste_pile_empty(&self) -> bool {
        self.waste_pile.is_empty()
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the waste pile.
    #[must_use]
    pub fn waste_pile_len(&self) -> usize {
        self.waste_pile.len()
    }

    /// Returns up to `n` cards from the top of the waste pile, top card first.
    #[must_use]
    pub fn waste_top_cards(&self, n: usize) -> Vec<Card> {
        self.waste_pile.top_cards(n)
    }

    /// Returns the foundation at `id`.
    #[must_use]
    pub fn foundation(&self, id: usize) -> Option<&FoundationPile> {
        self.foundations.get(id)
    }

    /// Returns all foundations in order.
    #[must_use]
    pub const fn foundations(&self) -> &[FoundationPile] {
        &self.foundations
    }

    /// Returns the number of cards on foundation `id`.
    ///
    /// Returns `None` if there is no such foundation.
    #[must_use]
    pub fn foundation_card_count(&self, id: usize) -> Option<usize> {
        self.foundation(id).map(FoundationPile::number_of_cards)
    }

    /// Returns the top card of foundation `id`.
    ///
    /// Returns `None` if the foundation is empty or does not exist.
    #[must_use]
    pub fn foundation_top_card(&self, id: usize) -> Option<Card> {
        self.foundation(id).and_then(FoundationPile::top_card)
    }

    /// Returns the number of cards moved by the most recent draw.
    #[must_use]
    pub const fn cards_removed_last_round(&self) -> usize {
        self.cards_removed_last_round
    }

    /// Returns whether [`Game::undo`] would move any cards.
    #[must_use]
    pub fn undo_available(&self) -> bool {
        self.options.undo
            && self.undo_armed
            && self.cards_removed_last_round > 0
            && !self.waste_pile.is_empty()
    }

    /// Returns the number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.waste_pile.len()
            + self
                .foundations
                .iter()
                .map(FoundationPile::number_of_cards)
                .sum::<usize>()
    }

    /// Returns whether every card has been placed on a foundation.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.draw_pile.is_empty()
            && self.waste_pile.is_empty()
            && self.total_cards() == self.options.card_count()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_won() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}

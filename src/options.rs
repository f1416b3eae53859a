//! Game configuration options.

use crate::card::DECK_SIZE;

/// Fewest physical decks a game can use.
pub const MIN_DECKS: u8 = 1;

/// Most physical decks a game can use; eight foundations hold two decks.
pub const MAX_DECKS: u8 = 2;

/// Configuration options for a Pasientza game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pasientza::GameOptions;
///
/// let options = GameOptions::default().with_decks(1).with_undo(false);
/// assert_eq!(options.card_count(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of physical 52-card decks shuffled into the draw pile.
    ///
    /// Values outside [`MIN_DECKS`]..=[`MAX_DECKS`] are clamped when a game is
    /// created.
    pub decks: u8,
    /// Whether the single-use undo is offered.
    pub undo: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            undo: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of physical decks, clamped to
    /// [`MIN_DECKS`]..=[`MAX_DECKS`].
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// assert_eq!(GameOptions::default().with_decks(3).decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = clamp_decks(decks);
        self
    }

    /// Returns a copy with `decks` clamped to [`MIN_DECKS`]..=[`MAX_DECKS`].
    #[must_use]
    pub const fn normalized(mut self) -> Self {
        self.decks = clamp_decks(self.decks);
        self
    }

    /// Sets whether undo is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::GameOptions;
    ///
    /// let options = GameOptions::default().with_undo(false);
    /// assert_eq!(options.undo, false);
    /// ```
    #[must_use]
    pub const fn with_undo(mut self, undo: bool) -> Self {
        self.undo = undo;
        self
    }

    /// Returns the size of the full construction set.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        clamp_decks(self.decks) as usize * DECK_SIZE
    }
}

const fn clamp_decks(decks: u8) -> u8 {
    if decks < MIN_DECKS {
        MIN_DECKS
    } else if decks > MAX_DECKS {
        MAX_DECKS
    } else {
        decks
    }
}

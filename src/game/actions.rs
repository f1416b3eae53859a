use log::{debug, info, trace};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::InvalidMove;
use crate::result::DrawResult;

use super::{DRAW_COUNT, Game};

impl Game {
    /// Turns the waste pile over to become the new draw pile.
    fn promote_waste_pile(&mut self) {
        self.waste_pile.inverse();
        self.draw_pile = core::mem::take(&mut self.waste_pile);
    }

    /// Draws up to three cards from the draw pile onto the waste pile.
    ///
    /// If the draw pile is empty, the waste pile is turned over into a new
    /// draw pile first. The last card drawn ends up on top of the waste pile.
    /// Drawing re-arms undo.
    ///
    /// # Example
    ///
    /// ```
    /// use pasientza::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// let draw = game.draw_three();
    /// assert_eq!(draw.drawn, 3);
    /// assert_eq!(game.waste_pile_len(), 3);
    /// assert!(game.undo_available());
    /// ```
    pub fn draw_three(&mut self) -> DrawResult {
        let recycled = self.draw_pile.is_empty() && !self.waste_pile.is_empty();
        if recycled {
            self.promote_waste_pile();
            debug!("waste pile recycled into {} card draw pile", self.draw_pile.len());
        }

        let mut drawn = 0;
        while drawn < DRAW_COUNT {
            let Some(card) = self.draw_pile.pop() else {
                break;
            };
            self.waste_pile.push(card);
            drawn += 1;
        }

        self.cards_removed_last_round = drawn;
        self.last_draw_recycled = recycled;
        self.undo_armed = true;
        debug!(
            "drew {drawn} cards, {} left in draw pile",
            self.draw_pile.len()
        );

        DrawResult { drawn, recycled }
    }

    /// Moves the top card of the waste pile onto foundation `foundation_id`.
    ///
    /// Returns `Ok(None)` if the waste pile is empty, and the placed card on
    /// success. A successful placement disables undo until the next draw.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the foundation does not exist or rejects the
    /// card. The card stays on top of the waste pile and nothing else changes.
    pub fn attempt_move_to_foundation(
        &mut self,
        foundation_id: usize,
    ) -> Result<Option<Card>, InvalidMove> {
        let foundation = self
            .foundations
            .get_mut(foundation_id)
            .ok_or(InvalidMove::FoundationNotFound(foundation_id))?;

        let Some(card) = self.waste_pile.pop() else {
            return Ok(None);
        };

        if let Err(err) = foundation.push(card) {
            self.waste_pile.push(card);
            debug!("rejected {card} on foundation {foundation_id}: {err}");
            return Err(err);
        }

        self.undo_armed = false;
        trace!("placed {card} on foundation {foundation_id}");

        if self.is_won() {
            info!("round won");
        }

        Ok(Some(card))
    }

    /// Returns the cards of the most recent draw to the draw pile.
    ///
    /// Available once per draw, and only while no card has been placed on a
    /// foundation since that draw. If the draw turned the waste pile over,
    /// that is reversed too, so both piles are exactly as before the draw.
    /// Returns the number of cards moved back; 0 means nothing happened.
    pub fn undo(&mut self) -> usize {
        if !self.undo_available() {
            return 0;
        }

        let mut returned = 0;
        for _ in 0..self.cards_removed_last_round {
            let Some(card) = self.waste_pile.pop() else {
                break;
            };
            self.draw_pile.push(card);
            returned += 1;
        }

        if self.last_draw_recycled {
            self.draw_pile.inverse();
            self.waste_pile = core::mem::take(&mut self.draw_pile);
        }

        self.cards_removed_last_round = 0;
        self.last_draw_recycled = false;
        self.undo_armed = false;
        debug!("undid draw of {returned} cards");

        returned
    }

    /// Starts a new game with a freshly shuffled draw pile.
    ///
    /// Empties the waste pile and every foundation and disables undo.
    pub fn replay(&mut self) {
        for foundation in &mut self.foundations {
            foundation.make_empty();
        }
        self.waste_pile.make_empty();
        self.draw_pile = Deck::new(true, self.options.decks, &mut self.rng);

        self.cards_removed_last_round = 0;
        self.last_draw_recycled = false;
        self.undo_armed = false;
        debug!("replay with {} cards", self.draw_pile.len());
    }
}

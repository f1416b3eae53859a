//! Game state types.

/// Game state, derived from the piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards remain in the draw or waste pile.
    Playing,
    /// Every card sits on a foundation. Terminal until replay.
    Won,
}

//! Outcomes of game commands.

/// Outcome of [`Game::draw_three`](crate::Game::draw_three).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawResult {
    /// Cards moved from the draw pile to the waste pile (0 to 3).
    pub drawn: usize,
    /// Whether the waste pile was turned over into a new draw pile first.
    pub recycled: bool,
}

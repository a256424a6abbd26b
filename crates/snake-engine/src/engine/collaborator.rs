//! Interfaces the game loop drives but does not implement.
//!
//! All calls are fire-and-forget: the game loop never inspects a result, and
//! implementations are expected to swallow (and log) their own failures.

use crate::core::{color::CellColors, position::Position};

/// Drawing surface.
pub trait Renderer {
    /// Erases the whole surface.
    fn clear(&mut self);

    /// Paints one grid cell.
    ///
    /// `position` may lie outside the board (a head that just left it);
    /// renderers should ignore such cells.
    fn draw_cell(&mut self, position: Position, colors: CellColors);
}

/// Score and result text shown next to the board.
pub trait ScoreDisplay {
    fn set_score(&mut self, score: usize);

    /// Shows `message`; an empty string clears the result area.
    fn set_result(&mut self, message: &str);
}

/// Sound-effect notifications. Muting is up to the implementation.
pub trait Audio {
    fn on_food_eaten(&mut self);
    fn on_game_over(&mut self);
}

use serde::{Deserialize, Serialize};

use super::direction::Velocity;

/// A point on the playfield, in board units (not cells).
///
/// Positions are expected to be multiples of the board's cell size, but the
/// type itself does not enforce it: the head is allowed to step one cell past
/// the edge so the termination check can observe it.
///
/// # Example
///
/// ```
/// use snake_engine::{Position, Velocity};
///
/// let head = Position::new(120, 0);
/// assert_eq!(head.offset(Velocity::new(30, 0)), Position::new(150, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position moved by one step of `velocity`.
    #[must_use]
    pub const fn offset(self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

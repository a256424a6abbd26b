use super::position::Position;

/// Playfield geometry: cell size and pixel-like extent.
///
/// Valid positions lie in `[0, width) × [0, height)` and are multiples of
/// `unit`. Both `width` and `height` are multiples of `unit`, so the board
/// holds exactly `columns() × rows()` cells.
///
/// # Example
///
/// ```
/// use snake_engine::{Board, Position};
///
/// let board = Board::DEFAULT;
/// assert_eq!((board.columns(), board.rows()), (20, 20));
/// assert!(board.contains(Position::new(570, 570)));
/// assert!(!board.contains(Position::new(600, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    unit: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("cell size must be positive, got {unit}")]
    NonPositiveUnit { unit: i32 },
    #[display("board extent must be positive, got {width}x{height}")]
    NonPositiveExtent { width: i32, height: i32 },
    #[display("board extent {width}x{height} is not a multiple of cell size {unit}")]
    Misaligned { unit: i32, width: i32, height: i32 },
}

impl Default for Board {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Board {
    pub const UNIT: i32 = 30;

    /// A 20 × 20 board of 30-unit cells.
    pub const DEFAULT: Self = Self {
        unit: Self::UNIT,
        width: 20 * Self::UNIT,
        height: 20 * Self::UNIT,
    };

    pub fn new(unit: i32, width: i32, height: i32) -> Result<Self, BoardError> {
        if unit <= 0 {
            return Err(BoardError::NonPositiveUnit { unit });
        }
        if width <= 0 || height <= 0 {
            return Err(BoardError::NonPositiveExtent { width, height });
        }
        if width % unit != 0 || height % unit != 0 {
            return Err(BoardError::Misaligned {
                unit,
                width,
                height,
            });
        }
        Ok(Self {
            unit,
            width,
            height,
        })
    }

    #[must_use]
    pub const fn unit(&self) -> i32 {
        self.unit
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn columns(&self) -> usize {
        (self.width / self.unit) as usize
    }

    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn rows(&self) -> usize {
        (self.height / self.unit) as usize
    }

    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        0 <= pos.x && pos.x < self.width && 0 <= pos.y && pos.y < self.height
    }

    #[must_use]
    pub const fn is_aligned(&self, pos: Position) -> bool {
        pos.x % self.unit == 0 && pos.y % self.unit == 0
    }

    /// Converts a position into `(column, row)` grid indices.
    ///
    /// Returns `None` for positions outside the board or off the grid.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn cell_index(&self, pos: Position) -> Option<(usize, usize)> {
        if !self.contains(pos) || !self.is_aligned(pos) {
            return None;
        }
        Some(((pos.x / self.unit) as usize, (pos.y / self.unit) as usize))
    }

    /// Inverse of [`Self::cell_index`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn cell_position(&self, column: usize, row: usize) -> Position {
        Position::new(column as i32 * self.unit, row as i32 * self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_geometry() {
        assert_eq!(
            Board::new(0, 600, 600),
            Err(BoardError::NonPositiveUnit { unit: 0 })
        );
        assert_eq!(
            Board::new(30, 0, 600),
            Err(BoardError::NonPositiveExtent {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            Board::new(30, 600, 610),
            Err(BoardError::Misaligned {
                unit: 30,
                width: 600,
                height: 610
            })
        );
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Board::new(30, 600, 600), Ok(Board::DEFAULT));
    }

    #[test]
    fn test_contains_is_half_open() {
        let board = Board::DEFAULT;
        assert!(board.contains(Position::ORIGIN));
        assert!(board.contains(Position::new(570, 570)));
        assert!(!board.contains(Position::new(-30, 0)));
        assert!(!board.contains(Position::new(0, -30)));
        assert!(!board.contains(Position::new(600, 0)));
        assert!(!board.contains(Position::new(0, 600)));
    }

    #[test]
    fn test_cell_index_roundtrip_on_corners() {
        let board = Board::DEFAULT;
        for (col, row) in [(0, 0), (19, 0), (0, 19), (19, 19), (7, 11)] {
            let pos = board.cell_position(col, row);
            assert_eq!(board.cell_index(pos), Some((col, row)));
        }
        assert_eq!(board.cell_index(Position::new(15, 0)), None);
        assert_eq!(board.cell_index(Position::new(600, 0)), None);
    }
}

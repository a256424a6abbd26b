use std::collections::VecDeque;

use super::position::Position;

/// Number of segments a fresh snake starts with.
pub const INITIAL_LENGTH: usize = 5;

/// Ordered snake body, head first.
///
/// The body is never empty: [`Snake::pop_tail`] refuses to remove the last
/// remaining segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Position>,
}

impl Snake {
    /// Builds the starting snake: [`INITIAL_LENGTH`] segments laid out
    /// horizontally along the top row, head on the right.
    ///
    /// ```
    /// use snake_engine::{Position, Snake};
    ///
    /// let snake = Snake::initial(30);
    /// assert_eq!(snake.head(), Position::new(120, 0));
    /// assert_eq!(snake.tail(), Position::new(0, 0));
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn initial(unit: i32) -> Self {
        let segments = (0..INITIAL_LENGTH)
            .rev()
            .map(|i| Position::new(i as i32 * unit, 0))
            .collect();
        Self { segments }
    }

    /// Builds a snake from explicit segments, head first.
    ///
    /// Returns `None` if `segments` is empty.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let segments: VecDeque<_> = segments.into_iter().collect();
        (!segments.is_empty()).then_some(Self { segments })
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; provided for API symmetry with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over all segments, head first.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Iterates over all segments except the head.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().skip(1).copied()
    }

    pub fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Removes and returns the tail segment, keeping at least one segment.
    pub fn pop_tail(&mut self) -> Option<Position> {
        if self.segments.len() <= 1 {
            return None;
        }
        self.segments.pop_back()
    }
}

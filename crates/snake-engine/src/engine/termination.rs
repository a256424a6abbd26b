use crate::core::{board::Board, snake::Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameOverCause {
    /// The head left the board.
    #[display("out of bounds")]
    OutOfBounds,
    /// The head ran into another segment.
    #[display("self collision")]
    SelfCollision,
}

/// Evaluates the terminal conditions for the current snake.
///
/// Pure: looks only at the head and the remaining segments. Bounds are checked
/// first, so a head that is both outside the board and on top of a segment
/// reports [`GameOverCause::OutOfBounds`].
///
/// # Example
///
/// ```
/// use snake_engine::{Board, GameOverCause, Position, Snake, check_termination};
///
/// let snake = Snake::from_segments([Position::new(-30, 0), Position::new(0, 0)]).unwrap();
/// assert_eq!(
///     check_termination(&Board::DEFAULT, &snake),
///     Some(GameOverCause::OutOfBounds),
/// );
/// ```
#[must_use]
pub fn check_termination(board: &Board, snake: &Snake) -> Option<GameOverCause> {
    let head = snake.head();
    if !board.contains(head) {
        return Some(GameOverCause::OutOfBounds);
    }
    if snake.body().any(|segment| segment == head) {
        return Some(GameOverCause::SelfCollision);
    }
    None
}

#[must_use]
pub fn is_terminal(board: &Board, snake: &Snake) -> bool {
    check_termination(board, snake).is_some()
}

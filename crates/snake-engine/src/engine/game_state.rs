use crate::core::{
    board::Board,
    direction::{Direction, Velocity},
    position::Position,
    snake::Snake,
};

use super::{
    food::{FoodSeed, FoodSpawner},
    termination::{GameOverCause, check_termination},
};

/// Result of a single [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Advance {
    /// The snake moved one cell; its length is unchanged.
    Moved,
    /// The head landed on the food: the snake grew, the score went up and new
    /// food was placed.
    AteFood,
}

#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("game is over, reset before advancing")]
pub struct GameNotRunningError;

/// Complete state of one game.
///
/// Two velocities are tracked: `velocity` is the one the last [`Self::advance`]
/// applied, `pending_velocity` is what the next advance will apply. Input only
/// ever writes the pending one, and reversal checks compare against the
/// applied one, so any number of key presses between two ticks cannot turn
/// the snake back onto itself.
///
/// # Example
///
/// ```
/// use snake_engine::{Board, Direction, GameState, Position};
///
/// let mut state = GameState::new(Board::DEFAULT);
/// assert!(state.set_heading(Direction::Down));
/// state.advance().unwrap();
/// assert_eq!(state.snake().head(), Position::new(120, 30));
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    velocity: Velocity,
    pending_velocity: Velocity,
    food: Position,
    score: usize,
    running: bool,
    spawner: FoodSpawner,
}

impl GameState {
    /// Starts a game with randomly seeded food placement.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_spawner(board, FoodSpawner::new())
    }

    /// Like [`Self::new`], but food placement follows `seed`.
    #[must_use]
    pub fn with_seed(board: Board, seed: FoodSeed) -> Self {
        Self::with_spawner(board, FoodSpawner::with_seed(seed))
    }

    fn with_spawner(board: Board, mut spawner: FoodSpawner) -> Self {
        let velocity = Self::initial_velocity(&board);
        let food = spawner.spawn(&board);
        Self {
            board,
            snake: Snake::initial(board.unit()),
            velocity,
            pending_velocity: velocity,
            food,
            score: 0,
            running: true,
            spawner,
        }
    }

    fn initial_velocity(board: &Board) -> Velocity {
        Direction::Right.velocity(board.unit())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Velocity applied by the most recent advance.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Velocity the next advance will apply.
    #[must_use]
    pub fn pending_velocity(&self) -> Velocity {
        self.pending_velocity
    }

    #[must_use]
    pub fn heading(&self) -> Option<Direction> {
        self.velocity.direction(self.board.unit())
    }

    #[must_use]
    pub fn food_seed(&self) -> FoodSeed {
        self.spawner.seed()
    }

    /// Requests a new heading for the next advance.
    ///
    /// Returns `false` and leaves the pending heading untouched when `dir` is
    /// the reverse of the current heading. Later accepted requests overwrite
    /// earlier ones.
    pub fn set_heading(&mut self, dir: Direction) -> bool {
        let requested = dir.velocity(self.board.unit());
        if requested.is_reverse_of(self.velocity) {
            return false;
        }
        self.pending_velocity = requested;
        true
    }

    /// Moves the food to a fresh random cell.
    pub fn spawn_food(&mut self) {
        self.food = self.spawner.spawn(&self.board);
    }

    /// Moves the snake one step along the pending heading.
    ///
    /// The new head is pushed first; the tail is dropped unless the head
    /// landed on the food, in which case the score is incremented and new
    /// food is spawned instead.
    pub fn advance(&mut self) -> Result<Advance, GameNotRunningError> {
        if !self.running {
            return Err(GameNotRunningError);
        }

        self.velocity = self.pending_velocity;
        let head = self.snake.head().offset(self.velocity);
        self.snake.push_head(head);

        if head == self.food {
            self.score += 1;
            self.spawn_food();
            return Ok(Advance::AteFood);
        }
        self.snake.pop_tail();
        Ok(Advance::Moved)
    }

    /// Evaluates the terminal conditions and stops the game if one holds.
    ///
    /// Once stopped, the game stays stopped until [`Self::reset`].
    pub fn check_termination(&mut self) -> Option<GameOverCause> {
        let cause = check_termination(&self.board, &self.snake)?;
        self.running = false;
        Some(cause)
    }

    /// Restores the starting snake, heading and score and places new food.
    ///
    /// The food spawner is reseeded from its own stream, so a reset game gets
    /// a new food sequence while [`Self::food_seed`] still replays it.
    pub fn reset(&mut self) {
        let velocity = Self::initial_velocity(&self.board);
        self.snake = Snake::initial(self.board.unit());
        self.velocity = velocity;
        self.pending_velocity = velocity;
        self.score = 0;
        self.running = true;
        self.spawner.reseed();
        self.spawn_food();
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Position) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn place_snake(&mut self, snake: Snake, dir: Direction) {
        let velocity = dir.velocity(self.board.unit());
        self.snake = snake;
        self.velocity = velocity;
        self.pending_velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: FoodSeed = FoodSeed::from_bytes([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    fn positions(points: &[(i32, i32)]) -> Vec<Position> {
        points.iter().copied().map(Position::from).collect()
    }

    fn segments(state: &GameState) -> Vec<Position> {
        state.snake().segments().collect()
    }

    fn new_state() -> GameState {
        let mut state = GameState::with_seed(Board::DEFAULT, SEED);
        // Keep food away from the top row unless a test puts it there.
        state.place_food(Position::new(300, 300));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::with_seed(Board::DEFAULT, SEED);
        assert_eq!(
            segments(&state),
            positions(&[(120, 0), (90, 0), (60, 0), (30, 0), (0, 0)])
        );
        assert_eq!(state.velocity(), Velocity::new(30, 0));
        assert_eq!(state.pending_velocity(), Velocity::new(30, 0));
        assert_eq!(state.heading(), Some(Direction::Right));
        assert_eq!(state.score(), 0);
        assert!(state.is_running());
        assert!(state.board().contains(state.food()));
        assert!(state.board().is_aligned(state.food()));
        assert_eq!(state.food_seed(), SEED);
    }

    #[test]
    fn test_advance_without_food_keeps_length() {
        let mut state = new_state();
        assert_eq!(state.advance().unwrap(), Advance::Moved);
        assert_eq!(
            segments(&state),
            positions(&[(150, 0), (120, 0), (90, 0), (60, 0), (30, 0)])
        );
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_advance_onto_food_grows_and_scores() {
        let mut state = new_state();
        state.place_food(Position::new(150, 0));

        // The spawner's next draw after the initial food is what should appear.
        let mut expected_spawner = FoodSpawner::with_seed(SEED);
        let _initial = expected_spawner.spawn(&Board::DEFAULT);
        let expected_food = expected_spawner.spawn(&Board::DEFAULT);

        assert_eq!(state.advance().unwrap(), Advance::AteFood);
        assert_eq!(
            segments(&state),
            positions(&[(150, 0), (120, 0), (90, 0), (60, 0), (30, 0), (0, 0)])
        );
        assert_eq!(state.score(), 1);
        assert_eq!(state.food(), expected_food);
    }

    #[test]
    fn test_head_moves_by_velocity_each_advance() {
        let mut state = new_state();
        for _ in 0..5 {
            let before = state.snake().head();
            let len = state.snake().len();
            state.advance().unwrap();
            assert_eq!(state.snake().head(), before.offset(state.velocity()));
            assert_eq!(state.snake().len(), len);
        }
    }

    #[test]
    fn test_reverse_heading_is_ignored() {
        let mut state = new_state();
        assert!(state.set_heading(Direction::Down));
        state.advance().unwrap();
        assert_eq!(state.velocity(), Velocity::new(0, 30));

        assert!(!state.set_heading(Direction::Up));
        assert_eq!(state.pending_velocity(), Velocity::new(0, 30));
    }

    #[test]
    fn test_heading_applies_on_next_advance() {
        let mut state = new_state();
        state.set_heading(Direction::Down);
        assert_eq!(state.velocity(), Velocity::new(30, 0));
        assert_eq!(state.snake().head(), Position::new(120, 0));

        state.advance().unwrap();
        assert_eq!(state.snake().head(), Position::new(120, 30));
    }

    #[test]
    fn test_last_heading_wins() {
        let mut state = new_state();
        assert!(state.set_heading(Direction::Up));
        assert!(state.set_heading(Direction::Down));
        state.advance().unwrap();
        assert_eq!(state.velocity(), Velocity::new(0, 30));
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse() {
        // Moving right: Up is accepted as pending, but Left is still the
        // reverse of the applied heading.
        let mut state = new_state();
        assert!(state.set_heading(Direction::Up));
        assert!(!state.set_heading(Direction::Left));
        assert_eq!(state.pending_velocity(), Velocity::new(0, -30));
    }

    #[test]
    fn test_down_then_up_within_tick_moves_up() {
        // Neither request reverses the applied heading (right), so the later
        // one wins and the snake never goes down.
        let mut state = new_state();
        assert!(state.set_heading(Direction::Down));
        assert!(state.set_heading(Direction::Up));
        state.advance().unwrap();
        assert_eq!(state.snake().head(), Position::new(120, -30));
        assert_eq!(state.heading(), Some(Direction::Up));
    }

    #[test]
    fn test_chasing_tail_is_not_terminal() {
        // Square loop: the head steps onto the cell the tail leaves this tick.
        let mut state = new_state();
        let snake = Snake::from_segments(positions(&[(30, 0), (30, 30), (0, 30), (0, 0)])).unwrap();
        state.place_snake(snake, Direction::Left);

        assert_eq!(state.advance().unwrap(), Advance::Moved);
        assert_eq!(
            segments(&state),
            positions(&[(0, 0), (30, 0), (30, 30), (0, 30)])
        );
        assert_eq!(state.check_termination(), None);
        assert!(state.is_running());
    }

    #[test]
    fn test_reset_reseeds_food_reproducibly() {
        let mut state = new_state();
        state.reset();
        let seed = state.food_seed();
        assert_ne!(seed, SEED);

        let replay = GameState::with_seed(Board::DEFAULT, seed);
        assert_eq!(replay.food(), state.food());

        // Same starting seed, same seed after reset.
        let mut twin = GameState::with_seed(Board::DEFAULT, SEED);
        twin.reset();
        assert_eq!(twin.food_seed(), seed);
    }

    #[test]
    fn test_leaving_left_edge_terminates() {
        let mut state = new_state();
        let snake = Snake::from_segments(positions(&[(0, 0), (30, 0), (60, 0)])).unwrap();
        state.place_snake(snake, Direction::Left);

        state.advance().unwrap();
        assert_eq!(state.snake().head(), Position::new(-30, 0));
        assert_eq!(state.check_termination(), Some(GameOverCause::OutOfBounds));
        assert!(!state.is_running());
    }

    #[test]
    fn test_biting_body_terminates() {
        // Hook shape travelling left along y=30; turning down bites (30, 60).
        let mut state = new_state();
        let snake =
            Snake::from_segments(positions(&[(30, 30), (60, 30), (60, 60), (30, 60), (0, 60)]))
                .unwrap();
        state.place_snake(snake, Direction::Left);
        assert!(state.set_heading(Direction::Down));
        assert_eq!(state.advance().unwrap(), Advance::Moved);
        assert_eq!(state.snake().head(), Position::new(30, 60));
        assert_eq!(
            state.check_termination(),
            Some(GameOverCause::SelfCollision)
        );
    }

    #[test]
    fn test_no_advance_after_termination() {
        let mut state = new_state();
        state.set_heading(Direction::Up);
        state.advance().unwrap();
        assert!(state.check_termination().is_some());

        let snapshot = segments(&state);
        assert!(state.advance().is_err());
        assert_eq!(segments(&state), snapshot);
        assert!(!state.is_running());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = new_state();
        state.place_food(Position::new(150, 0));
        state.advance().unwrap();
        state.set_heading(Direction::Up);
        state.advance().unwrap();
        assert!(state.check_termination().is_some());
        assert_eq!(state.score(), 1);

        state.reset();
        assert_eq!(
            segments(&state),
            positions(&[(120, 0), (90, 0), (60, 0), (30, 0), (0, 0)])
        );
        assert_eq!(state.velocity(), Velocity::new(30, 0));
        assert_eq!(state.pending_velocity(), Velocity::new(30, 0));
        assert_eq!(state.score(), 0);
        assert!(state.is_running());
        assert!(state.advance().is_ok());
    }

    #[test]
    fn test_food_always_on_grid() {
        let mut state = GameState::new(Board::DEFAULT);
        for _ in 0..200 {
            state.spawn_food();
            let food = state.food();
            assert!(state.board().contains(food) && state.board().is_aligned(food));
        }
    }
}

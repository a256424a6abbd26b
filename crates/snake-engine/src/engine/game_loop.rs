use std::time::Duration;

use log::{debug, info};

use crate::core::{color::CellColors, direction::Direction};

use super::{
    collaborator::{Audio, Renderer, ScoreDisplay},
    game_state::{Advance, GameState},
    scheduler::TickScheduler,
    termination::GameOverCause,
};

/// Delay between the end of one tick and the start of the next.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(75);

/// Result text shown once the game has ended.
pub const GAME_OVER_MESSAGE: &str = "GAME OVER!";

/// What a call to [`GameLoop::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TickOutcome {
    /// The snake advanced and the next tick was scheduled.
    Continue(Advance),
    /// The snake advanced into a terminal position; nothing was scheduled.
    GameOver(GameOverCause),
    /// The game had already ended; nothing happened.
    Idle,
}

/// Drives a [`GameState`] tick by tick and reports to its collaborators.
///
/// Every tick performs, in order: clear the surface, draw the food, advance
/// the snake, draw the snake, evaluate the terminal conditions, then either
/// schedule the next tick or report the game over. The food is drawn before
/// the advance, so food that gets eaten stays visible for that frame and its
/// replacement shows up on the next one.
///
/// Scheduling is cooperative: the loop never runs on a repeating timer, it
/// asks the [`TickScheduler`] for exactly one more tick at the end of each tick.
///
/// # Example
///
/// ```
/// use snake_engine::{
///     Audio, Board, CellColors, GameLoop, GameState, ManualScheduler, Position, Renderer,
///     ScoreDisplay,
/// };
///
/// #[derive(Default)]
/// struct Null;
/// impl Renderer for Null {
///     fn clear(&mut self) {}
///     fn draw_cell(&mut self, _: Position, _: CellColors) {}
/// }
/// impl ScoreDisplay for Null {
///     fn set_score(&mut self, _: usize) {}
///     fn set_result(&mut self, _: &str) {}
/// }
/// impl Audio for Null {
///     fn on_food_eaten(&mut self) {}
///     fn on_game_over(&mut self) {}
/// }
///
/// let mut scheduler = ManualScheduler::new();
/// let mut game = GameLoop::new(GameState::new(Board::DEFAULT), Null, Null, Null);
/// game.start(&mut scheduler);
/// while scheduler.fire().is_some() {
///     game.tick(&mut scheduler);
/// }
/// assert!(!game.state().is_running());
/// ```
#[derive(Debug)]
pub struct GameLoop<R, D, A> {
    state: GameState,
    tick_delay: Duration,
    renderer: R,
    display: D,
    audio: A,
}

impl<R, D, A> GameLoop<R, D, A>
where
    R: Renderer,
    D: ScoreDisplay,
    A: Audio,
{
    #[must_use]
    pub fn new(state: GameState, renderer: R, display: D, audio: A) -> Self {
        Self {
            state,
            tick_delay: DEFAULT_TICK_DELAY,
            renderer,
            display,
            audio,
        }
    }

    #[must_use]
    pub fn tick_delay(self, tick_delay: Duration) -> Self {
        Self { tick_delay, ..self }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Publishes the score, paints the first frame and schedules the first tick.
    pub fn start(&mut self, scheduler: &mut dyn TickScheduler) {
        info!(
            "game started (food seed {}, tick {:?})",
            self.state.food_seed(),
            self.tick_delay
        );
        self.display.set_score(self.state.score());
        self.renderer.clear();
        self.renderer.draw_cell(self.state.food(), CellColors::FOOD);
        self.draw_snake();
        scheduler.schedule(self.tick_delay);
    }

    /// Runs one tick. Call it when the scheduled delay has elapsed.
    pub fn tick(&mut self, scheduler: &mut dyn TickScheduler) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }

        self.renderer.clear();
        self.renderer.draw_cell(self.state.food(), CellColors::FOOD);

        let Ok(advance) = self.state.advance() else {
            return TickOutcome::Idle;
        };
        if advance.is_ate_food() {
            debug!(
                "food eaten at {}, score {}, next food at {}",
                self.state.snake().head(),
                self.state.score(),
                self.state.food()
            );
            self.audio.on_food_eaten();
            self.display.set_score(self.state.score());
        }

        self.draw_snake();

        if let Some(cause) = self.state.check_termination() {
            scheduler.cancel();
            info!(
                "game over: {cause} at {} with score {}",
                self.state.snake().head(),
                self.state.score()
            );
            self.audio.on_game_over();
            self.display.set_result(GAME_OVER_MESSAGE);
            return TickOutcome::GameOver(cause);
        }

        scheduler.schedule(self.tick_delay);
        TickOutcome::Continue(advance)
    }

    /// Drops any pending tick. The game state is left as is.
    pub fn stop(&mut self, scheduler: &mut dyn TickScheduler) {
        scheduler.cancel();
    }

    /// Starts over with a fresh game and clears the result text.
    ///
    /// A tick that is still pending is replaced by the new game's first tick,
    /// so resetting mid-game never leaves two loops running.
    pub fn reset(&mut self, scheduler: &mut dyn TickScheduler) {
        debug!("resetting game (score was {})", self.state.score());
        scheduler.cancel();
        self.state.reset();
        self.display.set_result("");
        self.start(scheduler);
    }

    /// Requests a heading change; see [`GameState::set_heading`].
    pub fn set_heading(&mut self, dir: Direction) -> bool {
        self.state.set_heading(dir)
    }

    /// Steers by key name. Returns `false` for unrecognised keys and rejected
    /// reversals.
    pub fn handle_key(&mut self, key_name: &str) -> bool {
        Direction::from_key_name(key_name).is_some_and(|dir| self.set_heading(dir))
    }

    fn draw_snake(&mut self) {
        for segment in self.state.snake().segments() {
            self.renderer.draw_cell(segment, CellColors::SNAKE);
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

use std::time::Duration;

use crossterm::event::Event;
use log::debug;
use ratatui::Frame;
use snake_engine::{Board, FoodSeed, GameLoop, GameState, TickScheduler};
use snake_runtime::{App, RenderMode, Runtime};

use crate::{
    command::play::input::PlayerCommand,
    ui::{Canvas, StatusPanel, TerminalBell, widgets::PlayDisplay},
};

const FPS: f64 = 60.0;

pub(crate) type PlayLoop = GameLoop<Canvas, StatusPanel, TerminalBell>;

#[derive(Debug)]
pub(crate) struct PlayApp {
    game: PlayLoop,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(
        board: Board,
        seed: Option<FoodSeed>,
        tick_delay: Duration,
        sound: bool,
    ) -> Self {
        let state = match seed {
            Some(seed) => GameState::with_seed(board, seed),
            None => GameState::new(board),
        };
        let game = GameLoop::new(
            state,
            Canvas::new(board),
            StatusPanel::default(),
            TerminalBell::new(sound),
        )
        .tick_delay(tick_delay);
        Self {
            game,
            is_exiting: false,
        }
    }

    pub(crate) fn game(&self) -> &PlayLoop {
        &self.game
    }

    fn apply(&mut self, scheduler: &mut dyn TickScheduler, command: PlayerCommand) {
        match command {
            PlayerCommand::Steer(key_name) => {
                if self.game.handle_key(&key_name) {
                    debug!("heading change requested with {key_name}");
                }
            }
            PlayerCommand::Reset => self.game.reset(scheduler),
            PlayerCommand::ToggleSound => self.game.audio_mut().toggle(),
            PlayerCommand::Quit => {
                self.game.stop(scheduler);
                self.is_exiting = true;
            }
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
        self.game.start(runtime);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(command) = PlayerCommand::from_event(&event) {
            self.apply(runtime, command);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let display = PlayDisplay::new(
            self.game.renderer(),
            self.game.display(),
            self.game.audio().is_enabled(),
        );
        frame.render_widget(display, frame.area());
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.game.tick(runtime);
    }
}

#[cfg(test)]
mod tests {
    use snake_engine::{Direction, ManualScheduler, Velocity};

    use super::*;

    fn new_app() -> PlayApp {
        PlayApp::new(
            Board::DEFAULT,
            Some(FoodSeed::from_bytes([9; 16])),
            Duration::from_millis(75),
            false,
        )
    }

    fn steer(name: &str) -> PlayerCommand {
        PlayerCommand::Steer(name.to_owned())
    }

    #[test]
    fn test_steering_updates_pending_heading() {
        let mut app = new_app();
        let mut scheduler = ManualScheduler::new();
        app.game.start(&mut scheduler);

        app.apply(&mut scheduler, steer("ArrowDown"));
        assert_eq!(
            app.game().state().pending_velocity(),
            Direction::Down.velocity(30)
        );

        // Unknown keys and reversals change nothing.
        app.apply(&mut scheduler, steer("x"));
        app.apply(&mut scheduler, steer("a"));
        assert_eq!(app.game().state().pending_velocity(), Velocity::new(0, 30));
    }

    #[test]
    fn test_reset_restarts_after_game_over() {
        let mut app = new_app();
        let mut scheduler = ManualScheduler::new();
        app.game.start(&mut scheduler);
        app.apply(&mut scheduler, steer("w"));
        while scheduler.fire().is_some() {
            app.game.tick(&mut scheduler);
        }
        assert_eq!(app.game().display().result(), "GAME OVER!");

        app.apply(&mut scheduler, PlayerCommand::Reset);
        assert_eq!(app.game().display().result(), "");
        assert_eq!(app.game().display().score(), 0);
        assert!(app.game().state().is_running());
        assert!(scheduler.is_armed());
    }

    #[test]
    fn test_toggle_sound() {
        let mut app = new_app();
        let mut scheduler = ManualScheduler::new();
        assert!(!app.game().audio().is_enabled());
        app.apply(&mut scheduler, PlayerCommand::ToggleSound);
        assert!(app.game().audio().is_enabled());
    }

    #[test]
    fn test_quit_cancels_tick() {
        let mut app = new_app();
        let mut scheduler = ManualScheduler::new();
        app.game.start(&mut scheduler);
        app.apply(&mut scheduler, PlayerCommand::Quit);
        assert!(app.should_exit());
        assert!(!scheduler.is_armed());
    }
}

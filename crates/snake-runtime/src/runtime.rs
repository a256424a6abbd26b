use std::{io, time::Duration};

use snake_engine::TickScheduler;

use crate::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal application runtime.
///
/// Owns the event loop and runs an [`App`] inside a ratatui terminal. It is
/// also the game's [`TickScheduler`]: scheduling arms the one-shot tick timer
/// and the fired tick is delivered through [`App::update`].
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render mode.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Returns whether a tick is currently armed.
    #[must_use]
    pub fn is_tick_armed(&self) -> bool {
        self.events.is_tick_armed()
    }

    /// Runs the application until [`App::should_exit`] returns true.
    ///
    /// 1. Calls `app.init()`
    /// 2. Dispatches events:
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - `Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}

impl TickScheduler for Runtime {
    fn schedule(&mut self, delay: Duration) {
        self.events.schedule_tick(delay);
    }

    fn cancel(&mut self) {
        self.events.cancel_tick();
    }
}

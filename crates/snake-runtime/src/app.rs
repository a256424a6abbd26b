use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for applications driven by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Use it to arm the first tick.
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Called when an armed tick fires.
    ///
    /// The tick timer is already disarmed at this point; schedule the next
    /// tick through `runtime` to keep the loop going.
    fn update(&mut self, runtime: &mut Runtime);
}

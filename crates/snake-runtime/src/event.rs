use crossterm::event::Event as CrosstermEvent;

/// Events the runtime dispatches to the application.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// The armed tick deadline was reached.
    Tick,
    /// The screen should be redrawn.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}

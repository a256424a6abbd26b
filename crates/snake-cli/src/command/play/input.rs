use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use snake_engine::{KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP};

/// What a key press asks the play screen to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerCommand {
    /// Forward the key name to the game; it decides whether the key steers.
    Steer(String),
    Reset,
    ToggleSound,
    Quit,
}

impl PlayerCommand {
    pub(crate) fn from_event(event: &Event) -> Option<Self> {
        event.as_key_event().and_then(|key| Self::from_key(&key))
    }

    pub(crate) fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let command = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            KeyCode::Char('r') => Self::Reset,
            KeyCode::Char('m') => Self::ToggleSound,
            code => Self::Steer(key_name(code)?),
        };
        Some(command)
    }
}

/// Translates a crossterm key code into the game's key naming.
fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => KEY_ARROW_UP.to_owned(),
        KeyCode::Down => KEY_ARROW_DOWN.to_owned(),
        KeyCode::Left => KEY_ARROW_LEFT.to_owned(),
        KeyCode::Right => KEY_ARROW_RIGHT.to_owned(),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    Some(name)
}

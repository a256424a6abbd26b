//! Key-name to heading mapping.
//!
//! Keys are identified by name, the way a browser reports `KeyboardEvent.key`:
//! arrow keys use their long names and letter keys are the lower-case letter.
//! Front ends translate their own key events into these names.

use crate::core::direction::Direction;

pub const KEY_ARROW_UP: &str = "ArrowUp";
pub const KEY_ARROW_DOWN: &str = "ArrowDown";
pub const KEY_ARROW_LEFT: &str = "ArrowLeft";
pub const KEY_ARROW_RIGHT: &str = "ArrowRight";

/// Every recognised key name and the heading it selects.
pub const KEY_BINDINGS: [(&str, Direction); 8] = [
    (KEY_ARROW_UP, Direction::Up),
    ("w", Direction::Up),
    (KEY_ARROW_DOWN, Direction::Down),
    ("s", Direction::Down),
    (KEY_ARROW_LEFT, Direction::Left),
    ("a", Direction::Left),
    (KEY_ARROW_RIGHT, Direction::Right),
    ("d", Direction::Right),
];

impl Direction {
    /// Maps a key name to a heading, `None` for keys that do not steer.
    ///
    /// ```
    /// use snake_engine::Direction;
    ///
    /// assert_eq!(Direction::from_key_name("ArrowLeft"), Some(Direction::Left));
    /// assert_eq!(Direction::from_key_name("a"), Some(Direction::Left));
    /// assert_eq!(Direction::from_key_name("Enter"), None);
    /// ```
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        KEY_BINDINGS
            .iter()
            .find_map(|&(key, dir)| (key == name).then_some(dir))
    }
}

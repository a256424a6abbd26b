//! Terminal implementations of the game's collaborators, and the widgets
//! that draw them.

pub(crate) use self::{audio::TerminalBell, canvas::Canvas, status::StatusPanel};

mod audio;
mod canvas;
mod status;
pub(crate) mod widgets;

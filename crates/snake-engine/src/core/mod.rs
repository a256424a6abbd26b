pub use self::{board::*, color::*, direction::*, position::*, snake::*};

pub(crate) mod board;
pub(crate) mod color;
pub(crate) mod direction;
pub(crate) mod position;
pub(crate) mod snake;

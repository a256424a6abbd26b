use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{
    board_display::*, cell_display::*, key_binding_display::*, play_display::*,
    status_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod play_display;
mod status_display;

mod color {
    use ratatui::style::Color;
    use snake_engine::Rgb;

    pub const BOARD: Color = Color::Rgb(0xE4, 0xEA, 0xD8);
    pub const GRID_DOT: Color = Color::Rgb(0x9D, 0xAD, 0x86);
    pub const RED: Color = Color::Rgb(0x81, 0x38, 0x2F);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub const fn from_rgb(Rgb(r, g, b): Rgb) -> Color {
        Color::Rgb(r, g, b)
    }
}

pub mod style {
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = fg_bg(color::GRID_DOT, color::BOARD);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}

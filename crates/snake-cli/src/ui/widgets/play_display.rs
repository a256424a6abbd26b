use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::{
    Canvas, StatusPanel,
    widgets::{BoardDisplay, KeyBinding, KeyBindingDisplay, StatusDisplay, color, style},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["↑", "w"], "Up"),
    (&["↓", "s"], "Down"),
    (&["←", "a"], "Left"),
    (&["→", "d"], "Right"),
    (&["r"], "Reset"),
    (&["m"], "Sound"),
    (&["q"], "Quit"),
];

/// Whole play screen: board, status panel, help line, and the result popup.
#[derive(Debug)]
pub(crate) struct PlayDisplay<'a> {
    canvas: &'a Canvas,
    status: &'a StatusPanel,
    sound_enabled: bool,
}

impl<'a> PlayDisplay<'a> {
    pub(crate) fn new(canvas: &'a Canvas, status: &'a StatusPanel, sound_enabled: bool) -> Self {
        Self {
            canvas,
            status,
            sound_enabled,
        }
    }
}

impl Widget for PlayDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PlayDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let game_over = !self.status.result().is_empty();
        let border_style = if game_over { color::RED } else { color::WHITE };

        let board = BoardDisplay::new(self.canvas)
            .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
        let status = StatusDisplay::new(self.status, self.sound_enabled).block(
            Block::bordered()
                .title(Line::from("SNAKE").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(board.height()), Constraint::Length(1)])
                .areas(area);
        let [board_area, status_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(status.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [status_area] =
            Layout::vertical([Constraint::Length(status.height())]).areas(status_area);

        let board_width = board.width();
        board.render(board_area, buf);
        status.render(status_area, buf);
        KeyBindingDisplay::new(KEY_BINDINGS).render(help_area, buf);

        if game_over {
            let block = Block::new().style(style::GAME_OVER);
            let text = Text::styled(self.status.result(), style::GAME_OVER).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use snake_engine::{Board, ScoreDisplay as _};

    use super::*;

    fn render_to_string(display: &PlayDisplay<'_>) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_popup_only_after_game_over() {
        let canvas = Canvas::new(Board::DEFAULT);
        let mut status = StatusPanel::default();
        let screen = render_to_string(&PlayDisplay::new(&canvas, &status, false));
        assert!(!screen.contains("GAME OVER!"));
        assert!(screen.contains("SCORE"));

        status.set_result("GAME OVER!");
        let screen = render_to_string(&PlayDisplay::new(&canvas, &status, false));
        assert!(screen.contains("GAME OVER!"));
    }
}

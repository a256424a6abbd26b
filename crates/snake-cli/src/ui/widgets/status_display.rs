use ratatui::{
    prelude::{Buffer, Rect},
    style::{Style, Stylize as _},
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::StatusPanel;

use super::color;

/// Side panel with the score and the sound setting.
#[derive(Debug)]
pub(crate) struct StatusDisplay<'a> {
    status: &'a StatusPanel,
    sound_enabled: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(status: &'a StatusPanel, sound_enabled: bool) -> Self {
        Self {
            status,
            sound_enabled,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        12 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        5 + super::block_vertical_margin(self.block.as_ref())
    }

    fn text(&self) -> Text<'static> {
        let sound = if self.sound_enabled { "on" } else { "off" };
        Text::from(vec![
            Line::from("SCORE").bold(),
            Line::from(self.status.score().to_string()).right_aligned(),
            Line::default(),
            Line::from("SOUND").bold(),
            Line::from(sound)
                .style(Style::new().fg(color::GRAY))
                .right_aligned(),
        ])
    }
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        self.text().render(area, buf);
    }
}

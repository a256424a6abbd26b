use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use snake_engine::CellColors;

use super::{color, style};

/// One board cell: two terminal columns wide, one row high.
#[derive(Debug)]
pub(crate) struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub(crate) const WIDTH: u16 = 2;
    pub(crate) const HEIGHT: u16 = 1;

    /// Empty cells show a faint grid dot; painted cells show their fill with
    /// the outline color as bracket "borders".
    pub(crate) const fn from_cell(cell: Option<CellColors>) -> Self {
        match cell {
            None => Self {
                style: style::EMPTY,
                symbol: ".",
            },
            Some(CellColors { fill, outline }) => Self {
                style: Style::new()
                    .fg(color::from_rgb(outline))
                    .bg(color::from_rgb(fill)),
                symbol: "[]",
            },
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}

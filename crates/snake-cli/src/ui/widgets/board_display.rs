use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::{Canvas, widgets::CellDisplay};

#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    canvas: &'a Canvas,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn width(&self) -> u16 {
        self.canvas.columns() as u16 * CellDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn height(&self) -> u16 {
        self.canvas.rows() as u16 * CellDisplay::HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..self.canvas.columns()).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints =
            (0..self.canvas.rows()).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = vertical
            .split(area)
            .iter()
            .map(|row| horizontal.split(*row))
            .collect::<Vec<_>>();

        for (grid_row, row) in iter::zip(&grid_rows, self.canvas.grid_rows()) {
            for (grid_cell, cell) in iter::zip(grid_row.iter(), row) {
                CellDisplay::from_cell(*cell).render(*grid_cell, buf);
            }
        }
    }
}

use log::trace;
use snake_engine::{Board, CellColors, Position, Renderer};

/// Off-screen grid the game paints into; the board widget displays it.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    board: Board,
    cells: Vec<Option<CellColors>>,
}

impl Canvas {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            cells: vec![None; board.columns() * board.rows()],
        }
    }

    pub(crate) fn columns(&self) -> usize {
        self.board.columns()
    }

    pub(crate) fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Iterates over the grid row by row, top first.
    pub(crate) fn grid_rows(&self) -> impl Iterator<Item = &[Option<CellColors>]> {
        self.cells.chunks(self.columns())
    }
}

impl Renderer for Canvas {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn draw_cell(&mut self, position: Position, colors: CellColors) {
        let Some((column, row)) = self.board.cell_index(position) else {
            trace!("skipping cell outside the board at {position}");
            return;
        };
        let columns = self.columns();
        self.cells[row * columns + column] = Some(colors);
    }
}

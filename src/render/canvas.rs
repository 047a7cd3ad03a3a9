use crate::game::{Board, Cell, Rgb, Surface};

/// Persistent cell buffer the game draws into.
///
/// Cells keep their colour between frames until erased or cleared, so a
/// frame only has to touch what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    board: Board,
    cells: Vec<Option<Rgb>>,
}

impl Canvas {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cells: vec![None; board.cell_count()],
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Colour painted at `cell`, `None` for background
    pub fn get(&self, cell: Cell) -> Option<Rgb> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    /// Number of painted cells
    pub fn painted(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.board
            .contains(cell)
            .then(|| cell.y as usize * self.board.width as usize + cell.x as usize)
    }
}

impl Surface for Canvas {
    fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = Some(color);
        }
    }

    fn erase_cell(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = None;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }
}

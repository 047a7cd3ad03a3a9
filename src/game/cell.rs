use super::action::Direction;

/// A position on the board, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing the pixel at (px, py)
    pub fn from_pixels(px: i32, py: i32, cell_size: u32) -> Self {
        let size = cell_size as i32;
        Self {
            x: px.div_euclid(size),
            y: py.div_euclid(size),
        }
    }

    /// Top-left pixel of this cell
    pub fn to_pixels(&self, cell_size: u32) -> (i32, i32) {
        let size = cell_size as i32;
        (self.x * size, self.y * size)
    }

    /// Move one cell in `direction`, re-entering from the opposite edge
    /// when stepping off the board.
    pub fn stepped(&self, direction: Direction, board: Board) -> Self {
        let (dx, dy) = direction.delta();
        board.wrap(Self {
            x: self.x + dx,
            y: self.y + dy,
        })
    }
}

/// Board dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: u32,
    pub height: u32,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    /// Fold any cell back onto the board (toroidal)
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.width as i32),
            y: cell.y.rem_euclid(self.height as i32),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_conversion() {
        let cell = Cell::from_pixels(100, 60, 20);
        assert_eq!(cell, Cell::new(5, 3));
        assert_eq!(cell.to_pixels(20), (100, 60));
    }

    #[test]
    fn test_step_inside_board() {
        let board = Board::new(32, 24);
        let cell = Cell::new(5, 5);
        assert_eq!(cell.stepped(Direction::Right, board), Cell::new(6, 5));
        assert_eq!(cell.stepped(Direction::Left, board), Cell::new(4, 5));
        assert_eq!(cell.stepped(Direction::Up, board), Cell::new(5, 4));
        assert_eq!(cell.stepped(Direction::Down, board), Cell::new(5, 6));
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let board = Board::new(32, 24);
        assert_eq!(Cell::new(31, 7).stepped(Direction::Right, board), Cell::new(0, 7));
        assert_eq!(Cell::new(0, 7).stepped(Direction::Left, board), Cell::new(31, 7));
        assert_eq!(Cell::new(9, 0).stepped(Direction::Up, board), Cell::new(9, 23));
        assert_eq!(Cell::new(9, 23).stepped(Direction::Down, board), Cell::new(9, 0));
    }

    #[test]
    fn test_center_and_bounds() {
        let board = Board::new(32, 24);
        assert_eq!(board.center(), Cell::new(16, 12));
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(31, 23)));
        assert!(!board.contains(Cell::new(32, 0)));
        assert!(!board.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_cells_cover_board() {
        let board = Board::new(3, 2);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), board.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }
}

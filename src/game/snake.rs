use std::collections::VecDeque;

use super::action::Direction;
use super::cell::{Board, Cell};
use super::drawable::{Drawable, Rgb, Surface};
use super::error::DrawError;

/// The snake in the game
///
/// Growth is lazy: [`Snake::grow`] only raises the target length, and the
/// next [`Snake::advance`] keeps the tail instead of dropping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Cell>,
    heading: Direction,
    pending: Option<Direction>,
    target_len: usize,
    /// Tail cell dropped by the last advance, if any
    vacated: Option<Cell>,
    board: Board,
    color: Rgb,
}

impl Snake {
    /// A length-one snake at the board centre heading right
    pub fn new(board: Board, color: Rgb) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            heading: Direction::Right,
            pending: None,
            target_len: 1,
            vacated: None,
            board,
            color,
        };
        snake.reset();
        snake
    }

    /// Build a snake from explicit cells (head first).
    ///
    /// The target length is the number of cells given.
    pub fn from_cells(cells: Vec<Cell>, heading: Direction, board: Board, color: Rgb) -> Self {
        let mut snake = Self::new(board, color);
        if !cells.is_empty() {
            snake.target_len = cells.len();
            snake.body = cells.into();
        }
        snake.heading = heading;
        snake
    }

    /// Queue a heading for the next advance. `None` leaves it untouched.
    pub fn set_heading(&mut self, direction: Option<Direction>) {
        if let Some(direction) = direction {
            self.pending = Some(direction);
        }
    }

    /// Move one cell along the heading, wrapping at the board edges
    pub fn advance(&mut self) {
        if let Some(direction) = self.pending {
            self.heading = direction;
        }

        let new_head = self.head().stepped(self.heading, self.board);
        self.body.push_front(new_head);

        self.vacated = if self.body.len() > self.target_len {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Every cell except the head
    pub fn occupied_behind_head(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    /// Whether the head sits on another body cell
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.occupied_behind_head().any(|cell| *cell == head)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Back to a single cell at the board centre, heading right
    pub fn reset(&mut self) {
        self.target_len = 1;
        self.body.clear();
        self.body.push_back(self.board.center());
        self.heading = Direction::Right;
        self.pending = None;
        self.vacated = None;
    }

    /// Check if the snake covers `cell` (head included)
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending
    }

    pub fn vacated(&self) -> Option<Cell> {
        self.vacated
    }

    /// Number of cells currently on the board
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Length the snake is growing towards
    pub fn target_len(&self) -> usize {
        self.target_len
    }
}

impl Drawable for Snake {
    fn cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        for cell in &self.body {
            surface.fill_cell(*cell, self.color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb(0, 255, 0);

    fn board() -> Board {
        Board::new(32, 24)
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(board(), GREEN);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.head(), Cell::new(16, 12));
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
        assert_eq!(snake.vacated(), None);
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(board(), GREEN);

        snake.advance();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(17, 12));
        assert_eq!(snake.vacated(), Some(Cell::new(16, 12)));
    }

    #[test]
    fn test_set_heading_applies_on_advance() {
        let mut snake = Snake::new(board(), GREEN);

        snake.set_heading(Some(Direction::Up));
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), Some(Direction::Up));

        snake.advance();
        assert_eq!(snake.heading(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(16, 11));
    }

    #[test]
    fn test_set_heading_none_is_noop() {
        let mut snake = Snake::new(board(), GREEN);
        snake.set_heading(Some(Direction::Down));
        snake.set_heading(None);
        assert_eq!(snake.pending_heading(), Some(Direction::Down));
    }

    #[test]
    fn test_set_heading_accepts_reversal() {
        let mut snake = Snake::new(board(), GREEN);
        snake.set_heading(Some(Direction::Left));
        snake.advance();
        assert_eq!(snake.heading(), Direction::Left);
        assert_eq!(snake.head(), Cell::new(15, 12));
    }

    #[test]
    fn test_grow_keeps_tail() {
        let mut snake = Snake::new(board(), GREEN);
        snake.grow();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_len(), 2);

        snake.advance();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.vacated(), None);
        assert_eq!(snake.cells(), vec![Cell::new(17, 12), Cell::new(16, 12)]);

        snake.advance();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.vacated(), Some(Cell::new(16, 12)));
    }

    #[test]
    fn test_occupied_behind_head() {
        let snake = Snake::from_cells(
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
            board(),
            GREEN,
        );
        let behind: Vec<_> = snake.occupied_behind_head().copied().collect();
        assert_eq!(behind, vec![Cell::new(4, 5), Cell::new(3, 5)]);
        assert!(!snake.collides_with_self());
        assert!(snake.contains(Cell::new(5, 5)));
        assert!(!snake.contains(Cell::new(6, 5)));
    }

    #[test]
    fn test_reversal_into_body_collides() {
        let mut snake = Snake::from_cells(
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
            board(),
            GREEN,
        );
        snake.set_heading(Some(Direction::Left));
        snake.advance();
        assert_eq!(snake.head(), Cell::new(4, 5));
        assert!(snake.collides_with_self());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut snake = Snake::from_cells(
            vec![Cell::new(1, 1), Cell::new(1, 2)],
            Direction::Up,
            board(),
            GREEN,
        );
        snake.set_heading(Some(Direction::Left));
        snake.grow();
        snake.advance();

        snake.reset();
        assert_eq!(snake.cells(), vec![Cell::new(16, 12)]);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
        assert_eq!(snake.vacated(), None);
    }

    #[test]
    fn test_from_empty_cells_falls_back_to_center() {
        let snake = Snake::from_cells(Vec::new(), Direction::Down, board(), GREEN);
        assert_eq!(snake.head(), board().center());
        assert_eq!(snake.heading(), Direction::Down);
    }
}

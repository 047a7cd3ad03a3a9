use rand::Rng;

use super::cell::{Board, Cell};
use super::drawable::{Drawable, Rgb, Surface};
use super::error::DrawError;

/// The apple the snake is chasing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
    color: Rgb,
}

impl Apple {
    /// Place an apple anywhere on the board, without looking at the snake
    pub fn new<R: Rng + ?Sized>(board: Board, color: Rgb, rng: &mut R) -> Self {
        Self {
            position: Self::random_position(board, rng),
            color,
        }
    }

    /// Place an apple at a fixed cell
    pub fn at(position: Cell, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Uniformly random cell, edges included
    pub fn random_position<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..board.width) as i32,
            rng.gen_range(0..board.height) as i32,
        )
    }

    /// Move to a random cell not in `occupied` and return it.
    ///
    /// Keeps sampling until a free cell comes up, so it never returns when
    /// `occupied` covers the whole board.
    pub fn relocate_avoiding<'a, R, I>(&mut self, occupied: I, board: Board, rng: &mut R) -> Cell
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        loop {
            let candidate = Self::random_position(board, rng);
            if !occupied.clone().into_iter().any(|cell| *cell == candidate) {
                self.position = candidate;
                return candidate;
            }
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }
}

impl Drawable for Apple {
    fn cells(&self) -> Vec<Cell> {
        vec![self.position]
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        surface.fill_cell(self.position, self.color);
        Ok(())
    }
}

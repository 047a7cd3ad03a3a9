//! Drawing capability shared by the apple and the snake
//!
//! Game objects never touch the terminal. They describe which cells they
//! occupy and in which colour, and paint themselves onto whatever
//! [`Surface`] the loop hands them.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::DrawError;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Render target addressed in cells
pub trait Surface {
    /// Paint one cell with `color`
    fn fill_cell(&mut self, cell: Cell, color: Rgb);

    /// Restore one cell to the background
    fn erase_cell(&mut self, cell: Cell);

    /// Restore every cell to the background
    fn clear(&mut self);
}

/// Something that occupies cells on the board and has a colour
pub trait Drawable {
    /// Occupied cells, in drawing order
    fn cells(&self) -> Vec<Cell>;

    fn color(&self) -> Rgb;

    /// Paint this object onto `surface`.
    ///
    /// Objects must provide their own drawing; the provided body reports
    /// the omission instead of silently drawing nothing.
    fn draw(&self, _surface: &mut dyn Surface) -> Result<(), DrawError> {
        Err(DrawError::NotImplemented {
            object: std::any::type_name::<Self>(),
        })
    }
}

//! Property tests for movement, growth and apple placement

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use the_snake::game::{Apple, Board, Cell, Direction, Rgb, Snake};

const GREEN: Rgb = Rgb(0, 255, 0);
const RED: Rgb = Rgb(255, 0, 0);

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn board_and_cell() -> impl Strategy<Value = (Board, Cell)> {
    (2u32..40, 2u32..40).prop_flat_map(|(w, h)| {
        (Just(Board::new(w, h)), 0..w as i32, 0..h as i32)
            .prop_map(|(board, x, y)| (board, Cell::new(x, y)))
    })
}

proptest! {
    /// Edge wrapping is exact and toroidal, also in pixel terms
    #[test]
    fn prop_advance_wraps_toroidally((board, start) in board_and_cell(), heading in direction()) {
        let mut snake = Snake::from_cells(vec![start], heading, board, GREEN);
        snake.advance();

        let (dx, dy) = heading.delta();
        let expected = Cell::new(
            (start.x + dx).rem_euclid(board.width as i32),
            (start.y + dy).rem_euclid(board.height as i32),
        );
        prop_assert_eq!(snake.head(), expected);

        let size = 20u32;
        let (px, py) = start.to_pixels(size);
        let (hx, hy) = snake.head().to_pixels(size);
        prop_assert_eq!(hx, (px + dx * size as i32).rem_euclid((board.width * size) as i32));
        prop_assert_eq!(hy, (py + dy * size as i32).rem_euclid((board.height * size) as i32));
    }

    /// Without growth the snake stays one cell long and follows its headings
    #[test]
    fn prop_path_follows_headings(
        (board, start) in board_and_cell(),
        headings in prop::collection::vec(direction(), 1..60),
    ) {
        let mut snake = Snake::from_cells(vec![start], Direction::Right, board, GREEN);
        let mut expected = start;

        for heading in headings {
            snake.set_heading(Some(heading));
            snake.advance();
            expected = expected.stepped(heading, board);

            prop_assert_eq!(snake.len(), 1);
            prop_assert_eq!(snake.head(), expected);
            prop_assert!(!snake.collides_with_self());
        }
    }

    /// One grow followed by one advance adds exactly one cell
    #[test]
    fn prop_grow_adds_one_cell(
        (board, start) in board_and_cell(),
        warmup in prop::collection::vec(direction(), 0..10),
        grown in 0usize..5,
    ) {
        let mut snake = Snake::from_cells(vec![start], Direction::Right, board, GREEN);
        for _ in 0..grown {
            snake.grow();
        }
        for heading in warmup {
            snake.set_heading(Some(heading));
            snake.advance();
        }
        // Let any earlier growth finish first
        for _ in 0..grown {
            snake.advance();
        }

        let before = snake.len();
        snake.grow();
        snake.advance();
        prop_assert_eq!(snake.len(), before + 1);
        prop_assert_eq!(snake.vacated(), None);
    }

    /// Relocation never lands on an occupied cell
    #[test]
    fn prop_relocate_avoids_occupied(
        (board, _) in board_and_cell(),
        seed in any::<u64>(),
        mask in prop::collection::vec(any::<bool>(), 1600),
    ) {
        let cells: Vec<Cell> = board.cells().collect();
        let mut occupied: Vec<Cell> = cells
            .iter()
            .zip(&mask)
            .filter(|(_, taken)| **taken)
            .map(|(cell, _)| *cell)
            .collect();
        // Keep at least one cell free
        if occupied.len() == cells.len() {
            occupied.pop();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut apple = Apple::at(Cell::new(0, 0), RED);
        let placed = apple.relocate_avoiding(&occupied, board, &mut rng);

        prop_assert!(board.contains(placed));
        prop_assert!(!occupied.contains(&placed));
        prop_assert_eq!(apple.position(), placed);
    }
}

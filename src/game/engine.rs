use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{
    action::Direction,
    apple::Apple,
    cell::{Board, Cell},
    config::GameConfig,
    snake::Snake,
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain move onto an empty cell
    Moved,
    /// Head landed on the apple; the snake grows and the apple moved
    AteApple,
    /// Head ran into the body; the snake was reset
    SelfCollision,
}

/// Result of a tick, as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub event: TickEvent,
    /// Tail cell left behind by the advance, to be erased
    pub vacated: Option<Cell>,
}

/// Owns the snake and the apple for one session and applies the tick rules
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    board: Board,
    snake: Snake,
    apple: Apple,
    rng: R,
    ticks: u64,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the config, or from entropy when unset
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let board = config.board();
        let snake = Snake::new(board, config.palette.snake);
        let mut apple = Apple::new(board, config.palette.apple, &mut rng);
        apple.relocate_avoiding(snake.body(), board, &mut rng);

        info!(
            width = board.width,
            height = board.height,
            speed = config.speed,
            "new session"
        );

        Self {
            config,
            board,
            snake,
            apple,
            rng,
            ticks: 0,
        }
    }

    /// Replace the snake and apple, e.g. to script a scenario
    pub fn with_state(mut self, snake: Snake, apple: Apple) -> Self {
        self.snake = snake;
        self.apple = apple;
        self
    }

    /// Forward a requested heading unless it reverses the current one.
    ///
    /// Only the current heading is compared, not one already queued for
    /// the next advance. Returns whether the request was queued.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.snake.heading().is_opposite(direction) {
            trace!(?direction, "reversal ignored");
            return false;
        }
        self.snake.set_heading(Some(direction));
        true
    }

    /// Advance the snake, then resolve the apple and self-collision checks
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.advance();
        self.ticks += 1;
        let vacated = self.snake.vacated();
        let head = self.snake.head();
        trace!(x = head.x, y = head.y, "advanced");

        let event = if head == self.apple.position() {
            self.snake.grow();
            let placed = self
                .apple
                .relocate_avoiding(self.snake.body(), self.board, &mut self.rng);
            debug!(
                length = self.snake.target_len(),
                apple_x = placed.x,
                apple_y = placed.y,
                "apple eaten"
            );
            TickEvent::AteApple
        } else if self.snake.collides_with_self() {
            info!(length = self.snake.len(), "self collision, resetting");
            self.snake.reset();
            if self.snake.contains(self.apple.position()) {
                self.apple
                    .relocate_avoiding(self.snake.body(), self.board, &mut self.rng);
            }
            TickEvent::SelfCollision
        } else {
            TickEvent::Moved
        };

        TickOutcome { event, vacated }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Ticks since the session started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

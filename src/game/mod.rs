//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The snake and the apple only expose data; the loop decides when to draw them.

pub mod action;
pub mod apple;
pub mod cell;
pub mod config;
pub mod drawable;
pub mod engine;
pub mod error;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use apple::Apple;
pub use cell::{Board, Cell};
pub use config::{GameConfig, Palette};
pub use drawable::{Drawable, Rgb, Surface};
pub use engine::{GameEngine, TickEvent, TickOutcome};
pub use error::{ConfigError, DrawError};
pub use snake::Snake;

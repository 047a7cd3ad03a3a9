use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cell::Board;
use super::drawable::Rgb;
use super::error::ConfigError;

/// Terminal columns drawn for one board cell
pub const CELL_COLUMNS: u32 = 2;

/// Widest board whose bordered frame still fits a `u16` terminal area
pub const MAX_BOARD_WIDTH: u32 = (u16::MAX as u32 - 2) / CELL_COLUMNS;

/// Tallest board whose bordered frame still fits a `u16` terminal area
pub const MAX_BOARD_HEIGHT: u32 = u16::MAX as u32 - 2;

/// Display colours for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// Outline drawn around every painted cell
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            apple: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play field in pixels
    pub screen_width: u32,
    /// Height of the play field in pixels
    pub screen_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    /// Ticks per second (cells advanced per second)
    pub speed: u32,
    pub palette: Palette,
    /// Fixed RNG seed for reproducible apple placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 10,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom play field size in pixels
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// Create a small board for testing (10x10 cells)
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Board dimensions in cells
    pub fn board(&self) -> Board {
        Board::new(
            self.screen_width / self.cell_size.max(1),
            self.screen_height / self.cell_size.max(1),
        )
    }

    /// Check that the configuration describes a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("cell_size", self.cell_size),
            ("speed", self.speed),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }

        for (field, pixels) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if pixels % self.cell_size != 0 {
                return Err(ConfigError::UnevenGrid {
                    field,
                    pixels,
                    cell_size: self.cell_size,
                });
            }
        }

        let board = self.board();
        if board.cell_count() < 2 {
            return Err(ConfigError::BoardTooSmall {
                width: board.width,
                height: board.height,
            });
        }
        if board.width > MAX_BOARD_WIDTH || board.height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::BoardTooLarge {
                width: board.width,
                height: board.height,
                max_width: MAX_BOARD_WIDTH,
                max_height: MAX_BOARD_HEIGHT,
            });
        }

        Ok(())
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.speed.max(1)))
    }
}

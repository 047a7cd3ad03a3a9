//! Error types for configuration and drawing

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or unreadable board configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dimension, cell size or speed was zero
    #[error("'{field}' must be greater than zero")]
    Zero { field: &'static str },

    /// Pixel dimension is not a whole number of cells
    #[error("'{field}' ({pixels}px) is not a multiple of the cell size ({cell_size}px)")]
    UnevenGrid {
        field: &'static str,
        pixels: u32,
        cell_size: u32,
    },

    /// Board has room for fewer than two cells
    #[error("board of {width}x{height} cells is too small to play on")]
    BoardTooSmall { width: u32, height: u32 },

    /// Board does not fit a terminal frame
    #[error("board of {width}x{height} cells exceeds the {max_width}x{max_height} limit")]
    BoardTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raised when a drawable object has no drawing behaviour of its own
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("draw is not implemented for {object}")]
    NotImplemented { object: &'static str },
}

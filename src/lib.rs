//! The Snake - a single-screen snake game for the terminal
//!
//! This library provides:
//! - Core game logic: snake, apple and the tick rules (game module)
//! - A persistent cell canvas and ratatui rendering (render module)
//! - Keyboard mapping (input module)
//! - On-screen session statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

use std::time::{Duration, Instant};

use crate::game::{TickEvent, TickOutcome};

/// On-screen statistics for the current process. Never persisted.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Apples eaten since the last reset
    pub apples: u32,
    /// Longest snake seen this session
    pub best_length: usize,
    /// Self-collisions so far
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            apples: 0,
            best_length: 1,
            resets: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick into the counters; `length` is the snake's current length
    pub fn on_tick(&mut self, outcome: &TickOutcome, length: usize) {
        match outcome.event {
            TickEvent::AteApple => self.apples += 1,
            TickEvent::SelfCollision => {
                self.resets += 1;
                self.apples = 0;
            }
            TickEvent::Moved => {}
        }
        self.best_length = self.best_length.max(length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

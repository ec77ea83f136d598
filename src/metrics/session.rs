use std::time::{Duration, Instant};

use crate::game::StepEvent;

/// Counters for the running session. Kept in memory only.
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    /// Food eaten since the last reset
    pub food_eaten: u32,
    /// Rounds finished so far, by collision or by filling the board
    pub rounds: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            rounds: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn record(&mut self, event: StepEvent) {
        self.ticks += 1;
        match event {
            StepEvent::Moved => {}
            StepEvent::Ate => self.food_eaten += 1,
            StepEvent::Collided | StepEvent::BoardFilled => {
                self.rounds += 1;
                self.food_eaten = 0;
            }
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

use crate::constants::{ACCURACY_NOISE_DIVISOR, STATS_WINDOW};
use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent readings for one sensor channel.
pub struct RollingWindow {
    buf: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, reading: f64) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.buf.iter().copied()
    }

    pub fn oldest(&self) -> Option<f64> {
        self.buf.front().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.buf.back().copied()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Mean absolute deviation of the window from `target`, rounded to the
/// nearest count. An empty window reads as zero noise.
pub fn avg_noise(window: &RollingWindow, target: f64) -> i32 {
    if window.is_empty() {
        return 0;
    }
    let sum: f64 = window.iter().map(|r| (r - target).abs()).sum();
    (sum / window.len() as f64).round() as i32
}

/// Accuracy score derived from average noise, clamped to [0, 100].
pub fn accuracy(avg_noise: i32) -> i32 {
    (100.0 - avg_noise as f64 / ACCURACY_NOISE_DIVISOR)
        .round()
        .clamp(0.0, 100.0) as i32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub avg_noise: i32,
    pub accuracy: i32,
}

/// Rolling statistics for one sensor channel.
///
/// Every stored reading is compared against the latest target, not the
/// target in effect when it was recorded, so the score dips briefly after
/// fast moves and recovers as the window refills.
pub struct SensorSession {
    window: RollingWindow,
}

impl SensorSession {
    pub fn new() -> Self {
        Self {
            window: RollingWindow::new(STATS_WINDOW),
        }
    }

    pub fn record(&mut self, reading: f64, target: f64) -> StatsSnapshot {
        self.window.push(reading);
        let avg = avg_noise(&self.window, target);
        StatsSnapshot {
            avg_noise: avg,
            accuracy: accuracy(avg),
        }
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }
}

impl Default for SensorSession {
    fn default() -> Self {
        Self::new()
    }
}

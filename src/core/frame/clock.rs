//=========================================================================
// Frame Clock
//=========================================================================

use std::time::{Duration, Instant};

/// Measures the time between rendered frames, in seconds.
///
/// The first frame reports zero. Long stalls (window dragged, debugger
/// paused) are capped at `max_delta` so the ship does not jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl FrameClock {
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last: None,
            max_delta,
        }
    }

    /// Reads the wall clock and returns the delta since the previous call.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = match self.last.replace(now) {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        self.cap(elapsed)
    }

    /// Returns the capped delta for a known elapsed time.
    pub fn cap(&self, elapsed: Duration) -> f32 {
        elapsed.min(self.max_delta).as_secs_f32()
    }

    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

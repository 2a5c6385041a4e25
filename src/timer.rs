//! Monotonic timer for search time management.

use std::time::Instant;

/// Wall-clock timer measuring elapsed time since construction or reset.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[must_use]
    pub fn start() -> Self {
        Timer {
            start: Instant::now(),
        }
    }

    /// Elapsed time in microseconds.
    #[must_use]
    pub fn elapsed_micros(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Restart the timer.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_timer_advances() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed_micros() >= 10_000);
    }

    #[test]
    fn test_timer_reset() {
        let mut timer = Timer::start();
        thread::sleep(Duration::from_millis(10));
        timer.reset();
        assert!(timer.elapsed_millis() < 10);
    }
}

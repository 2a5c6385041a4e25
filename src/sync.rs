//! Synchronization primitives shared between the UCI driver and the search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A thread-safe stop flag for cooperative search cancellation.
///
/// Wraps `Arc<AtomicBool>`; the driver sets it, the search polls it between
/// nodes and at iterative-deepening depth boundaries.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// Check if the stop flag is set.
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Set the stop flag.
    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clear the stop flag.
    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_flag_lifecycle() {
        let flag = StopFlag::new();
        assert!(!flag.is_stopped());

        flag.stop();
        assert!(flag.is_stopped());

        flag.reset();
        assert!(!flag.is_stopped());
    }

    #[test]
    fn test_stop_flag_shared_between_clones() {
        let flag1 = StopFlag::new();
        let flag2 = flag1.clone();

        flag1.stop();
        assert!(flag2.is_stopped());
    }
}

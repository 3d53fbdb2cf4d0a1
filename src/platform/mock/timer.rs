//! Mock Timer implementation for testing

use crate::platform::traits::TimerInterface;

/// Mock Timer implementation
///
/// Uses simulated time: delays return immediately and advance the clock.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delays: u32,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delays requested so far
    pub fn delay_count(&self) -> u32 {
        self.delays
    }
}

impl TimerInterface for MockTimer {
    async fn delay_ms(&mut self, ms: u32) {
        self.now_us = self.now_us.wrapping_add(ms as u64 * 1000);
        self.delays += 1;
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

//! RP2040 Timer implementation
//!
//! Delays and timestamps come from the embassy time driver, which runs off
//! the RP2040 64-bit microsecond timer.

use crate::platform::traits::TimerInterface;
use embassy_time::{Instant, Timer};

/// RP2040 Timer implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Rp2040Timer;

impl Rp2040Timer {
    /// Create a new RP2040 Timer instance
    pub fn new() -> Self {
        Self
    }
}

impl TimerInterface for Rp2040Timer {
    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(ms as u64).await;
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

//! Timer interface trait
//!
//! This module defines the timer and delay interface that platform implementations must provide.

/// Timer interface trait
///
/// # Safety Invariants
///
/// - Monotonic time source (never goes backwards)
#[allow(async_fn_in_trait)]
pub trait TimerInterface {
    /// Suspend the caller for at least `ms` milliseconds
    async fn delay_ms(&mut self, ms: u32);

    /// Get current time in microseconds
    ///
    /// Returns a monotonic timestamp in microseconds since platform initialization.
    fn now_us(&self) -> u64;

    /// Get current time in milliseconds
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

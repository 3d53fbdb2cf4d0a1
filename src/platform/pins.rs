//! Digital input pin bookkeeping
//!
//! Tracks which pins were provided to a platform and which of those have
//! already been claimed, so a claim can tell "in use" apart from "never
//! provided".

use crate::platform::{
    error::{GpioError, PlatformError},
    Result,
};
use heapless::Vec;

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// Table of provided and claimed pins
#[derive(Debug)]
pub struct PinTable<P, const N: usize> {
    available: Vec<(u8, P), N>,
    claimed: Vec<u8, N>,
}

impl<P, const N: usize> PinTable<P, N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self {
            available: Vec::new(),
            claimed: Vec::new(),
        }
    }

    /// Provide `pin` under GPIO number `number`
    ///
    /// # Errors
    ///
    /// - `PlatformError::Gpio(GpioError::InvalidPin)` for a number above [`MAX_GPIO`]
    /// - `PlatformError::Gpio(GpioError::PinInUse)` if the number is already known
    /// - `PlatformError::ResourceUnavailable` when the table is full
    pub fn register(&mut self, number: u8, pin: P) -> Result<()> {
        if number > MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.is_known(number) {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        self.available
            .push((number, pin))
            .map_err(|_| PlatformError::ResourceUnavailable)
    }

    /// Take the pin registered under `number`
    ///
    /// # Errors
    ///
    /// - `PlatformError::Gpio(GpioError::InvalidPin)` for a number above [`MAX_GPIO`]
    /// - `PlatformError::Gpio(GpioError::PinInUse)` if it was already claimed
    /// - `PlatformError::ResourceUnavailable` if it was never registered
    pub fn claim(&mut self, number: u8) -> Result<P> {
        if number > MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.claimed.contains(&number) {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        let index = self
            .available
            .iter()
            .position(|(n, _)| *n == number)
            .ok_or(PlatformError::ResourceUnavailable)?;
        let (_, pin) = self.available.swap_remove(index);
        // Never fails: every claimed number came out of `available`
        let _ = self.claimed.push(number);
        Ok(pin)
    }

    fn is_known(&self, number: u8) -> bool {
        self.claimed.contains(&number) || self.available.iter().any(|(n, _)| *n == number)
    }
}

impl<P, const N: usize> Default for PinTable<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

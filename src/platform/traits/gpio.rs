//! GPIO interface trait
//!
//! This module defines the digital input interface that platform implementations must provide.

/// GPIO input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
}

/// GPIO interface trait
///
/// # Safety Invariants
///
/// - GPIO pin must be initialized before use
/// - Only one owner per GPIO pin instance
/// - Pin number must be valid for the platform
pub trait GpioInterface {
    /// Read GPIO pin state
    ///
    /// Returns `true` if the pin is high, `false` if low.
    fn is_high(&self) -> bool;

    /// Returns `true` if the pin is low
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Get current GPIO pin mode
    fn mode(&self) -> GpioMode;
}

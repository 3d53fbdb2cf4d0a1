//! Root platform trait
//!
//! This module defines the root Platform trait that hands out the peripherals
//! the joystick reporter needs.

use super::{AdcInterface, GpioInterface, GpioMode, TimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each peripheral
/// interface via associated types, enabling compile-time dispatch.
///
/// # Example
///
/// ```ignore
/// let mut platform = Rp2040Platform::new(analog);
/// let adc = platform.init_analog()?;
/// let button = platform.init_digital_input(6, GpioMode::InputPullUp)?;
/// let timer = platform.create_timer();
/// ```
pub trait Platform: Sized {
    /// ADC peripheral type
    type Adc: AdcInterface;

    /// GPIO input type
    type Gpio: GpioInterface;

    /// Timer type
    type Timer: TimerInterface;

    /// Initialize the ADC and its joystick input channels
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the ADC was already
    /// handed out.
    fn init_analog(&mut self) -> Result<Self::Adc>;

    /// Configure `pin` as a digital input
    ///
    /// # Errors
    ///
    /// - `PlatformError::Gpio(GpioError::InvalidPin)` for an unknown pin
    /// - `PlatformError::Gpio(GpioError::PinInUse)` if the pin was already
    ///   handed out
    /// - `PlatformError::ResourceUnavailable` if the platform was never given
    ///   the pin
    fn init_digital_input(&mut self, pin: u8, mode: GpioMode) -> Result<Self::Gpio>;

    /// Create a timer for delays and timestamps
    fn create_timer(&mut self) -> Self::Timer;
}

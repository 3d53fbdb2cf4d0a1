//! RP2040 GPIO implementation

use crate::platform::traits::{GpioInterface, GpioMode};
use embassy_rp::gpio::Input;

/// RP2040 GPIO input
///
/// Wraps an `embassy-rp` input pin to implement the `GpioInterface` trait.
pub struct Rp2040Gpio {
    input: Input<'static>,
    mode: GpioMode,
}

impl Rp2040Gpio {
    /// Create a new RP2040 GPIO instance
    pub fn new(input: Input<'static>, mode: GpioMode) -> Self {
        Self { input, mode }
    }
}

impl GpioInterface for Rp2040Gpio {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

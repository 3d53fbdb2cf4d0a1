//! Mock GPIO implementation for testing

use crate::platform::traits::{GpioInterface, GpioMode};

/// Mock GPIO input
///
/// Starts at the level its pull resistor would produce and can be driven
/// from tests to simulate an external signal.
#[derive(Debug)]
pub struct MockGpio {
    pin: u8,
    state: bool,
    mode: GpioMode,
}

impl MockGpio {
    /// Create a new mock input on `pin`
    pub fn new_input(pin: u8, mode: GpioMode) -> Self {
        Self {
            pin,
            state: matches!(mode, GpioMode::InputPullUp),
            mode,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Pin number this input was created for
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl GpioInterface for MockGpio {
    fn is_high(&self) -> bool {
        self.state
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

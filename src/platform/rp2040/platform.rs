//! RP2040 Platform implementation
//!
//! This module provides the root Platform trait implementation for RP2040.

use crate::platform::{
    error::PlatformError,
    pins::PinTable,
    traits::{AdcChannel, GpioMode, Platform},
    Result,
};

use super::{Irqs, Rp2040Adc, Rp2040Gpio, Rp2040Timer};
use embassy_rp::{
    adc::{Adc, Channel, Config as AdcConfig},
    gpio::{AnyPin, Input, Pin as _, Pull},
    peripherals::{ADC, PIN_26, PIN_27},
    Peri,
};

/// Maximum number of digital inputs the platform can hold
pub const MAX_INPUTS: usize = 4;

/// Peripherals backing the joystick axes
pub struct AnalogParts {
    /// ADC block
    pub adc: Peri<'static, ADC>,
    /// ADC0 input (GPIO26)
    pub adc0: Peri<'static, PIN_26>,
    /// ADC1 input (GPIO27)
    pub adc1: Peri<'static, PIN_27>,
}

/// RP2040 Platform implementation
///
/// Peripherals are split out of `embassy_rp::Peripherals` by the binary and
/// handed over here; each one can be claimed once.
pub struct Rp2040Platform {
    analog: Option<AnalogParts>,
    inputs: PinTable<Peri<'static, AnyPin>, MAX_INPUTS>,
}

impl Rp2040Platform {
    /// Create a new platform instance
    pub fn new(analog: AnalogParts) -> Self {
        Self {
            analog: Some(analog),
            inputs: PinTable::new(),
        }
    }

    /// Make `pin` available to [`Platform::init_digital_input`]
    ///
    /// # Errors
    ///
    /// - `PlatformError::Gpio(GpioError::PinInUse)` if the pin was already added
    /// - `PlatformError::ResourceUnavailable` when the input table is full
    pub fn add_input(&mut self, pin: Peri<'static, AnyPin>) -> Result<()> {
        let number = pin.pin();
        self.inputs.register(number, pin)
    }
}

impl Platform for Rp2040Platform {
    type Adc = Rp2040Adc;
    type Gpio = Rp2040Gpio;
    type Timer = Rp2040Timer;

    fn init_analog(&mut self) -> Result<Self::Adc> {
        let parts = self
            .analog
            .take()
            .ok_or(PlatformError::ResourceUnavailable)?;

        let mut adc = Rp2040Adc::new(Adc::new(parts.adc, Irqs, AdcConfig::default()));
        adc.set_channel(AdcChannel::Adc0, Channel::new_pin(parts.adc0, Pull::None));
        adc.set_channel(AdcChannel::Adc1, Channel::new_pin(parts.adc1, Pull::None));
        Ok(adc)
    }

    fn init_digital_input(&mut self, pin: u8, mode: GpioMode) -> Result<Self::Gpio> {
        let peripheral = self.inputs.claim(pin)?;

        let pull = match mode {
            GpioMode::Input => Pull::None,
            GpioMode::InputPullUp => Pull::Up,
            GpioMode::InputPullDown => Pull::Down,
        };
        Ok(Rp2040Gpio::new(Input::new(peripheral, pull), mode))
    }

    fn create_timer(&mut self) -> Self::Timer {
        Rp2040Timer::new()
    }
}

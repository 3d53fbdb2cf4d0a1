//! Mock Platform implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{AdcChannel, GpioMode, Platform},
    Result,
};

use super::{MockAdc, MockGpio, MockTimer};
use heapless::Vec;

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing.
///
/// # Example
///
/// ```ignore
/// use pico_joystick::platform::mock::MockPlatform;
/// use pico_joystick::platform::traits::{GpioMode, Platform};
///
/// let mut platform = MockPlatform::new();
/// let button = platform.init_digital_input(6, GpioMode::InputPullUp).unwrap();
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    adc: Option<MockAdc>,
    gpio_allocated: Vec<u8, 30>,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            adc: Some(MockAdc::new()),
            gpio_allocated: Vec::new(),
        }
    }

    /// Maximum GPIO pin number
    pub const MAX_GPIO: u8 = crate::platform::pins::MAX_GPIO;

    /// Preset the raw reading the ADC will return for `channel`
    ///
    /// Has no effect once the ADC was handed out.
    pub fn set_adc_reading(&mut self, channel: AdcChannel, raw: u16) {
        if let Some(adc) = self.adc.as_mut() {
            adc.set_reading(channel, raw);
        }
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Adc = MockAdc;
    type Gpio = MockGpio;
    type Timer = MockTimer;

    fn init_analog(&mut self) -> Result<Self::Adc> {
        self.adc.take().ok_or(PlatformError::ResourceUnavailable)
    }

    fn init_digital_input(&mut self, pin: u8, mode: GpioMode) -> Result<Self::Gpio> {
        if pin > Self::MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.gpio_allocated.contains(&pin) {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        self.gpio_allocated
            .push(pin)
            .map_err(|_| PlatformError::ResourceUnavailable)?;
        Ok(MockGpio::new_input(pin, mode))
    }

    fn create_timer(&mut self) -> Self::Timer {
        MockTimer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{AdcInterface, GpioInterface};

    #[tokio::test]
    async fn test_mock_platform_analog() {
        let mut platform = MockPlatform::new();
        platform.set_adc_reading(AdcChannel::Adc0, 1234);

        let mut adc = platform.init_analog().unwrap();
        assert_eq!(adc.read(AdcChannel::Adc0).await.unwrap(), 1234);

        // ADC can only be handed out once
        assert_eq!(
            platform.init_analog().unwrap_err(),
            PlatformError::ResourceUnavailable
        );
    }

    #[test]
    fn test_mock_platform_gpio() {
        let mut platform = MockPlatform::new();
        let button = platform.init_digital_input(6, GpioMode::InputPullUp).unwrap();
        assert!(button.is_high());

        // Same GPIO should not be allocatable twice
        assert_eq!(
            platform
                .init_digital_input(6, GpioMode::InputPullUp)
                .unwrap_err(),
            PlatformError::Gpio(GpioError::PinInUse)
        );

        // Invalid GPIO should fail
        assert_eq!(
            platform.init_digital_input(100, GpioMode::Input).unwrap_err(),
            PlatformError::Gpio(GpioError::InvalidPin)
        );
    }
}

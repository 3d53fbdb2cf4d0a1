//! ADC interface trait
//!
//! This module defines the analog-to-digital converter interface that platform
//! implementations must provide.

use crate::platform::Result;

/// Number of external ADC inputs on the RP2040
pub const ADC_CHANNEL_COUNT: usize = 4;

/// External ADC input
///
/// On the RP2040 these map to GPIO 26-29.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 (GPIO 26)
    Adc0,
    /// ADC1 (GPIO 27)
    Adc1,
    /// ADC2 (GPIO 28)
    Adc2,
    /// ADC3 (GPIO 29)
    Adc3,
}

impl AdcChannel {
    /// Zero-based channel index
    pub fn index(self) -> usize {
        match self {
            AdcChannel::Adc0 => 0,
            AdcChannel::Adc1 => 1,
            AdcChannel::Adc2 => 2,
            AdcChannel::Adc3 => 3,
        }
    }

    /// GPIO pin number backing this channel
    pub fn gpio(self) -> u8 {
        26 + self.index() as u8
    }
}

/// ADC interface trait
///
/// Platform implementations must provide this interface for one-shot
/// conversions.
///
/// # Safety Invariants
///
/// - ADC peripheral must be initialized before use
/// - Only one owner per ADC instance
/// - Readings are raw 12-bit values (0-4095)
#[allow(async_fn_in_trait)]
pub trait AdcInterface {
    /// Perform a single conversion on `channel`
    ///
    /// # Errors
    ///
    /// - `PlatformError::Adc(AdcError::ChannelUnavailable)` if the channel
    ///   was not set up
    /// - `PlatformError::Adc(AdcError::ConversionFailed)` if the converter
    ///   reported an error
    async fn read(&mut self, channel: AdcChannel) -> Result<u16>;
}

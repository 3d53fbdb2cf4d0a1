//! RP2040 ADC implementation
//!
//! This module provides async one-shot conversions using `embassy-rp`.

use crate::platform::{
    error::{AdcError, PlatformError},
    traits::{adc::ADC_CHANNEL_COUNT, AdcChannel, AdcInterface},
    Result,
};
use embassy_rp::adc::{Adc, Async, Channel};

/// RP2040 ADC implementation
///
/// Owns the converter and the channels that were configured on it. Reading an
/// unconfigured channel fails with `AdcError::ChannelUnavailable`.
pub struct Rp2040Adc {
    adc: Adc<'static, Async>,
    channels: [Option<Channel<'static>>; ADC_CHANNEL_COUNT],
}

impl Rp2040Adc {
    /// Create a new RP2040 ADC with no channels configured
    pub fn new(adc: Adc<'static, Async>) -> Self {
        Self {
            adc,
            channels: [None, None, None, None],
        }
    }

    /// Attach an input channel
    pub fn set_channel(&mut self, channel: AdcChannel, input: Channel<'static>) {
        self.channels[channel.index()] = Some(input);
    }
}

impl AdcInterface for Rp2040Adc {
    async fn read(&mut self, channel: AdcChannel) -> Result<u16> {
        let input = self.channels[channel.index()]
            .as_mut()
            .ok_or(PlatformError::Adc(AdcError::ChannelUnavailable))?;
        self.adc
            .read(input)
            .await
            .map_err(|_| PlatformError::Adc(AdcError::ConversionFailed))
    }
}

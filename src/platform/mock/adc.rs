//! Mock ADC implementation for testing

use crate::platform::{
    error::{AdcError, PlatformError},
    traits::{adc::ADC_CHANNEL_COUNT, AdcChannel, AdcInterface},
    Result,
};

/// Mock ADC implementation
///
/// Returns a programmable raw value per channel and can simulate failed
/// conversions. Channels default to a reading of 0.
#[derive(Debug, Default, Clone)]
pub struct MockAdc {
    readings: [u16; ADC_CHANNEL_COUNT],
    failing: [bool; ADC_CHANNEL_COUNT],
    reads: [u32; ADC_CHANNEL_COUNT],
}

impl MockAdc {
    /// Create a new mock ADC with every channel reading 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw value returned for `channel`
    pub fn set_reading(&mut self, channel: AdcChannel, raw: u16) {
        self.readings[channel.index()] = raw;
    }

    /// Make conversions on `channel` fail (or succeed again)
    pub fn set_failing(&mut self, channel: AdcChannel, failing: bool) {
        self.failing[channel.index()] = failing;
    }

    /// Number of conversions requested on `channel`
    pub fn read_count(&self, channel: AdcChannel) -> u32 {
        self.reads[channel.index()]
    }
}

impl AdcInterface for MockAdc {
    async fn read(&mut self, channel: AdcChannel) -> Result<u16> {
        let index = channel.index();
        self.reads[index] += 1;

        if self.failing[index] {
            return Err(PlatformError::Adc(AdcError::ConversionFailed));
        }
        Ok(self.readings[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_adc_readings() {
        let mut adc = MockAdc::new();
        adc.set_reading(AdcChannel::Adc1, 4095);

        assert_eq!(adc.read(AdcChannel::Adc1).await.unwrap(), 4095);
        assert_eq!(adc.read(AdcChannel::Adc0).await.unwrap(), 0);
        assert_eq!(adc.read_count(AdcChannel::Adc1), 1);
        assert_eq!(adc.read_count(AdcChannel::Adc0), 1);
    }

    #[tokio::test]
    async fn test_mock_adc_failure() {
        let mut adc = MockAdc::new();
        adc.set_failing(AdcChannel::Adc0, true);

        assert_eq!(
            adc.read(AdcChannel::Adc0).await,
            Err(PlatformError::Adc(AdcError::ConversionFailed))
        );

        adc.set_failing(AdcChannel::Adc0, false);
        assert!(adc.read(AdcChannel::Adc0).await.is_ok());
    }
}

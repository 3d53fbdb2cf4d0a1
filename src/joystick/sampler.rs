//! Joystick position sampling
//!
//! Reads the two analog axes and scales them into a [`Coordinate`].

use crate::platform::traits::{AdcChannel, AdcInterface};
use pico_joystick_core::position::Coordinate;

/// Two-axis joystick sampler
///
/// A failed conversion keeps that axis at its previous raw reading (0 before
/// the first successful read), so sampling itself never fails.
pub struct Sampler<A: AdcInterface> {
    adc: A,
    x_channel: AdcChannel,
    y_channel: AdcChannel,
    last_raw: (u16, u16),
}

impl<A: AdcInterface> Sampler<A> {
    /// Create a sampler reading X and Y from the given channels
    pub fn new(adc: A, x_channel: AdcChannel, y_channel: AdcChannel) -> Self {
        Self {
            adc,
            x_channel,
            y_channel,
            last_raw: (0, 0),
        }
    }

    /// Read both axes and scale them to the bar range
    pub async fn sample(&mut self) -> Coordinate {
        let x = read_or_keep(&mut self.adc, self.x_channel, self.last_raw.0).await;
        let y = read_or_keep(&mut self.adc, self.y_channel, self.last_raw.1).await;
        self.last_raw = (x, y);
        Coordinate::from_raw(x, y)
    }

    /// Raw readings used by the last sample
    pub fn last_raw(&self) -> (u16, u16) {
        self.last_raw
    }

    /// Access the underlying ADC
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }
}

async fn read_or_keep<A: AdcInterface>(adc: &mut A, channel: AdcChannel, previous: u16) -> u16 {
    match adc.read(channel).await {
        Ok(raw) => raw,
        Err(e) => {
            crate::log_warn!("ADC{} read failed: {}", channel.index() as u8, e);
            previous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockAdc;

    fn sampler() -> Sampler<MockAdc> {
        Sampler::new(MockAdc::new(), AdcChannel::Adc1, AdcChannel::Adc0)
    }

    #[tokio::test]
    async fn test_sample_scales_both_axes() {
        let mut sampler = sampler();
        sampler.adc_mut().set_reading(AdcChannel::Adc1, 2048);
        sampler.adc_mut().set_reading(AdcChannel::Adc0, 3900);

        assert_eq!(sampler.sample().await, Coordinate { x: 20, y: 38 });
        assert_eq!(sampler.last_raw(), (2048, 3900));
    }

    #[tokio::test]
    async fn test_sample_clamps_out_of_range_raw() {
        let mut sampler = sampler();
        sampler.adc_mut().set_reading(AdcChannel::Adc1, u16::MAX);

        assert_eq!(sampler.sample().await, Coordinate { x: 40, y: 0 });
    }

    #[tokio::test]
    async fn test_sample_keeps_previous_reading_on_failure() {
        let mut sampler = sampler();
        sampler.adc_mut().set_reading(AdcChannel::Adc1, 4095);
        sampler.adc_mut().set_reading(AdcChannel::Adc0, 1024);
        assert_eq!(sampler.sample().await, Coordinate { x: 40, y: 10 });

        sampler.adc_mut().set_failing(AdcChannel::Adc0, true);
        sampler.adc_mut().set_reading(AdcChannel::Adc1, 0);
        assert_eq!(sampler.sample().await, Coordinate { x: 0, y: 10 });
    }

    #[tokio::test]
    async fn test_sample_failure_before_first_read_is_zero() {
        let mut sampler = sampler();
        sampler.adc_mut().set_failing(AdcChannel::Adc1, true);
        sampler.adc_mut().set_reading(AdcChannel::Adc0, 4095);

        assert_eq!(sampler.sample().await, Coordinate { x: 0, y: 40 });
    }
}

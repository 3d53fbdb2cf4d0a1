//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_joystick::platform::mock::MockPlatform;
//! use pico_joystick::platform::traits::{AdcChannel, Platform};
//!
//! let mut platform = MockPlatform::new();
//! platform.set_adc_reading(AdcChannel::Adc1, 2048);
//! let mut adc = platform.init_analog()?;
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod gpio;
mod platform;
mod timer;

pub use adc::MockAdc;
pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use timer::MockTimer;

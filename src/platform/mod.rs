//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the joystick board.
//! All platform-specific code is isolated to this module.

pub mod error;
pub mod pins;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico_w")]
pub mod rp2040;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcChannel, AdcInterface, GpioInterface, GpioMode, Platform, TimerInterface};

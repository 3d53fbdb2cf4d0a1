//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod gpio;
pub mod platform;
pub mod timer;

// Re-export trait interfaces
pub use adc::{AdcChannel, AdcInterface};
pub use gpio::{GpioInterface, GpioMode};
pub use platform::Platform;
pub use timer::TimerInterface;

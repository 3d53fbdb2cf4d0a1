//! RP2040 platform implementation for Raspberry Pi Pico W
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2040 microcontroller using the `embassy-rp` crate, plus
//! the CYW43439 WiFi bring-up and the HTTPS transport.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_joystick = { version = "0.1", features = ["pico_w"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pico_joystick::platform::rp2040::{AnalogParts, Rp2040Platform};
//! use pico_joystick::platform::traits::Platform;
//!
//! let p = embassy_rp::init(Default::default());
//! let mut platform = Rp2040Platform::new(AnalogParts {
//!     adc: p.ADC,
//!     adc0: p.PIN_26,
//!     adc1: p.PIN_27,
//! });
//! let adc = platform.init_analog().unwrap();
//! ```

mod adc;
mod gpio;
pub mod http;
pub mod network;
mod platform;
mod timer;

pub use adc::Rp2040Adc;
pub use gpio::Rp2040Gpio;
pub use http::Rp2040HttpTransport;
pub use platform::{AnalogParts, Rp2040Platform};
pub use timer::Rp2040Timer;

use embassy_rp::{bind_interrupts, peripherals::PIO0};

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

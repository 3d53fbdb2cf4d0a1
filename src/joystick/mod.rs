//! Joystick reporter application
//!
//! ## Modules
//!
//! - `sampler`: ADC sampling and scaling of the two axes
//! - `reporter`: status line formatting and HTTPS delivery
//! - `app`: wiring and the periodic control loop
//!
//! ## Control Loop
//!
//! ```text
//! loop {
//!     Sampler::sample() ──► classify() ──► Reporter::report()
//!     delay(interval_ms)
//! }
//! ```

pub mod app;
pub mod reporter;
pub mod sampler;

// Re-export commonly used types
pub use app::{setup, CycleReport, CycleStats, JoystickApp, JoystickConfig};
pub use reporter::Reporter;
pub use sampler::Sampler;

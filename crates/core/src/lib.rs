//! pico_joystick_core - Pure no_std logic for the joystick reporter
//!
//! This crate contains the platform-agnostic part of the firmware and can be
//! tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Bounded buffers**: All text is built in fixed-capacity `heapless` storage
//!
//! # Modules
//!
//! - [`position`]: ADC-to-bar scaling and the [`position::Coordinate`] type
//! - [`direction`]: Compass direction classification
//! - [`report`]: Status line formatting, percent-encoding and request targets

#![no_std]

pub mod direction;
pub mod position;
pub mod report;

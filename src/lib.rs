#![cfg_attr(not(test), no_std)]

//! pico_joystick - Joystick direction reporter for Raspberry Pi Pico W
//!
//! This library provides platform abstraction, the HTTPS reporting transport,
//! and the sample-classify-report control loop. The pure logic (scaling,
//! classification, status formatting and percent-encoding) lives in the
//! `pico_joystick_core` crate.

// Platform abstraction layer
pub mod platform;

// Core systems (logging)
pub mod core;

// Communication protocols (HTTPS GET reporting)
pub mod communication;

// Build-time configuration
pub mod parameters;

// Joystick application
pub mod joystick;

//! Communication Protocols
//!
//! This module provides the outbound reporting protocol for the joystick.
//!
//! # Protocols
//!
//! - **HTTPS GET**: each status line is percent-encoded into the query of a
//!   GET request against a fixed host
//!
//! # Transport Layers
//!
//! - WiFi (CYW43439) + embassy-net TCP + embedded-tls, see
//!   `platform::rp2040::http`
//! - Host mock for tests, see [`http::mock`]

pub mod http;

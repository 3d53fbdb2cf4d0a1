//! Status report composition
//!
//! Everything the reporter does before touching the network:
//!
//! ```text
//! Coordinate + Direction ──► format ──► encode ──► prefix + encoded ──► OutboundRequest
//! ```
//!
//! Every stage writes into a bounded buffer and truncates instead of
//! overflowing.

pub mod config;
pub mod encode;
pub mod format;
pub mod request;

pub use config::ReporterConfig;
pub use encode::{percent_encode_into, EncodedMessage};
pub use format::{format_status, StatusLine};
pub use request::{build_target, compose_request, https_url, OutboundRequest, RequestTarget};

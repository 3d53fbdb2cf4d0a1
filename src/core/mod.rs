//! Core firmware infrastructure
//!
//! Cross-cutting pieces shared by every other module (currently logging).

pub mod logging;

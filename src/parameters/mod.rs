//! Build-time Parameters
//!
//! Configuration is baked into the firmware at build time: `build.rs` passes
//! environment variables through to `env!`, and this module loads them into
//! bounded types.
//!
//! # Parameters
//!
//! | Variable             | Default                    | Loaded by      |
//! |----------------------|----------------------------|----------------|
//! | `WIFI_SSID`          | empty (not configured)     | [`WifiParams`]   |
//! | `WIFI_PASSWORD`      | empty                      | [`WifiParams`]   |
//! | `REPORT_HOST`        | `server-y824.onrender.com` | [`ReportParams`] |
//! | `REPORT_PATH`        | `/mensagem?msg=`           | [`ReportParams`] |
//! | `REPORT_INTERVAL_MS` | `1000`                     | [`ReportParams`] |
//!
//! # Example
//!
//! ```bash
//! WIFI_SSID=MyNetwork WIFI_PASSWORD=secret cargo build --release --features pico_w
//! ```

pub mod report;
pub mod wifi;

pub use report::ReportParams;
pub use wifi::WifiParams;

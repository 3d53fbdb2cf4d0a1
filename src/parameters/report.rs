//! Report Endpoint Parameters
//!
//! # Parameters
//!
//! - `REPORT_HOST` - Remote host name, always contacted over HTTPS
//! - `REPORT_PATH` - Path prefix the encoded status line is appended to
//! - `REPORT_INTERVAL_MS` - Delay between reports

use pico_joystick_core::report::config::{DEFAULT_HOST, DEFAULT_PATH_PREFIX};
use pico_joystick_core::report::ReporterConfig;

/// Default delay between reports
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Report endpoint and cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportParams {
    /// Remote host name
    pub host: &'static str,
    /// Request path prefix
    pub path_prefix: &'static str,
    /// Delay between reports in milliseconds
    pub interval_ms: u32,
}

impl ReportParams {
    /// Load report parameters from the build-time environment
    pub fn from_env() -> Self {
        Self::from_values(
            env!("REPORT_HOST"),
            env!("REPORT_PATH"),
            env!("REPORT_INTERVAL_MS"),
        )
    }

    /// Build parameters from string values
    ///
    /// An empty host or path falls back to the default endpoint.
    pub fn from_values(host: &'static str, path_prefix: &'static str, interval: &str) -> Self {
        Self {
            host: if host.is_empty() { DEFAULT_HOST } else { host },
            path_prefix: if path_prefix.is_empty() {
                DEFAULT_PATH_PREFIX
            } else {
                path_prefix
            },
            interval_ms: parse_interval(interval),
        }
    }

    /// Immutable configuration handed to the reporter
    pub fn reporter_config(&self) -> ReporterConfig {
        ReporterConfig::new(self.host, self.path_prefix)
    }
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            path_prefix: DEFAULT_PATH_PREFIX,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Parse a report interval, falling back to the default for zero or garbage
fn parse_interval(s: &str) -> u32 {
    match s.trim().parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_INTERVAL_MS,
        Ok(ms) => ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_params_defaults() {
        let params = ReportParams::default();
        assert_eq!(params.host, "server-y824.onrender.com");
        assert_eq!(params.path_prefix, "/mensagem?msg=");
        assert_eq!(params.interval_ms, 1000);
    }

    #[test]
    fn test_report_params_from_values() {
        let params = ReportParams::from_values("example.com", "/log?m=", "250");
        assert_eq!(params.host, "example.com");
        assert_eq!(params.path_prefix, "/log?m=");
        assert_eq!(params.interval_ms, 250);
    }

    #[test]
    fn test_report_params_empty_values_use_defaults() {
        assert_eq!(ReportParams::from_values("", "", ""), ReportParams::default());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("1000"), 1000);
        assert_eq!(parse_interval(" 500 "), 500);
        assert_eq!(parse_interval("0"), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("-1"), DEFAULT_INTERVAL_MS);
        assert_eq!(parse_interval("fast"), DEFAULT_INTERVAL_MS);
    }

    #[test]
    fn test_reporter_config() {
        let config = ReportParams::from_values("example.com", "/p?m=", "1000").reporter_config();
        assert_eq!(config.host, "example.com");
        assert_eq!(config.path_prefix, "/p?m=");
    }
}
